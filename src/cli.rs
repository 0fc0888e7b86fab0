use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::commands::{CompletionsCommand, ExportsCommand, LoginCommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "ssocreds", version, about = "Turn an AWS SSO login into static credentials", long_about = None, arg_required_else_help = false)]
pub struct Cli {
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    #[command(about = "Log in with AWS SSO and write ~/.aws/credentials (default)")]
    Login(LoginCommand),
    #[command(about = "Log in with AWS SSO and print shell export statements")]
    Exports(ExportsCommand),
    #[command(about = "Generate shell completion scripts for ssocreds")]
    Completions(CompletionsCommand),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let command = self.command.unwrap_or(Commands::Login(LoginCommand {}));

        match command {
            Commands::Login(cmd) => cmd.execute().await,
            Commands::Exports(cmd) => cmd.execute().await,
            Commands::Completions(cmd) => {
                cmd.execute();
                Ok(())
            }
        }
    }
}
