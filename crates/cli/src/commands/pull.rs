//! Pull command handler.

use crate::commands::push::open_repo;
use clap::Args;
use promptctl_core::{config::AppConfig, AppResult};

/// Pull prompts from the remote
#[derive(Args, Debug)]
pub struct PullCommand {}

impl PullCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing pull command");

        let output = open_repo(config)?.pull()?;
        if !output.is_empty() {
            println!("{}", output);
        }
        Ok(())
    }
}
