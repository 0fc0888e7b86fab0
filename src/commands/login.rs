use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::{bridge, config::Paths, sso::AwsCliLogin};

#[derive(Debug, Clone, Args)]
pub struct LoginCommand {}

impl LoginCommand {
    pub async fn execute(self) -> Result<()> {
        let paths = Paths::discover()?;
        info!("Refreshing {}", paths.credentials_file.display());

        bridge::sync_credentials_file(&AwsCliLogin::default(), &paths)
            .await
            .context("Failed to refresh AWS credentials")?;

        println!(
            "AWS credentials saved to {}",
            paths.credentials_file.display()
        );
        Ok(())
    }
}
