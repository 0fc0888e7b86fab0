use std::{
    future::Future,
    io,
    process::Stdio,
};

use tokio::process::Command;
use tracing::{debug, info};

use crate::{
    constants::{SSO_LOGIN_ARGS, SSO_LOGIN_PROGRAM},
    error::Error,
};

/// Something that performs an interactive SSO login and refreshes the CLI cache
pub trait LoginExecutor {
    fn run(&self) -> impl Future<Output = Result<(), Error>> + Send;
}

/// Runs `aws sso login` and waits for it to exit
#[derive(Debug, Clone)]
pub struct AwsCliLogin {
    program: String,
    args: Vec<String>,
}

impl Default for AwsCliLogin {
    fn default() -> Self {
        Self::with_command(SSO_LOGIN_PROGRAM, SSO_LOGIN_ARGS)
    }
}

impl AwsCliLogin {
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl LoginExecutor for AwsCliLogin {
    async fn run(&self) -> Result<(), Error> {
        info!("Running `{}`", self.command_line());

        // stdout stays free for shell-sourceable output
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::from(io::stderr()))
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| Error::LoginSpawn {
                program: self.program.clone(),
                source,
            })?;

        debug!("Login process finished: {}", status);

        if !status.success() {
            return Err(Error::LoginFailed(format!(
                "`{}` exited with {}",
                self.command_line(),
                status
            )));
        }

        info!("SSO login completed");
        Ok(())
    }
}
