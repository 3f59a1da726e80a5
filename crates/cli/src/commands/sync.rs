//! Sync command handler: pull, then push every change.

use crate::commands::push::{open_repo, push_all};
use crate::git::ORIGIN;
use clap::Args;
use promptctl_core::{config::AppConfig, AppResult};

/// Pull, then push
#[derive(Args, Debug)]
pub struct SyncCommand {
    /// Commit message for local changes
    #[arg(short, long)]
    pub message: Option<String>,
}

impl SyncCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing sync command");

        let git = open_repo(config)?;

        if git.has_remote(ORIGIN)? {
            let output = git.pull()?;
            if !output.is_empty() {
                println!("{}", output);
            }
        } else {
            tracing::warn!("No '{}' remote configured, skipping pull", ORIGIN);
        }

        push_all(config, &git, self.message.as_deref())
    }
}
