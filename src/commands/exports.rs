use anyhow::{Context, Result};
use clap::Args;

use crate::{aws::exports::render_exports, bridge, config::Paths, sso::AwsCliLogin};

#[derive(Debug, Clone, Args)]
pub struct ExportsCommand {}

impl ExportsCommand {
    pub async fn execute(self) -> Result<()> {
        let paths = Paths::discover()?;

        let creds = bridge::fetch_credentials(&AwsCliLogin::default(), &paths)
            .await
            .context("Failed to load cached AWS credentials")?;

        for line in render_exports(&creds) {
            println!("{line}");
        }
        Ok(())
    }
}
