//! Init command handler.
//!
//! Creates the registry directory and turns it into a git repository.

use crate::git::{Git, ORIGIN};
use clap::Args;
use promptctl_core::{config::AppConfig, AppResult};

/// Create the registry directory and its git repository
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Git remote URL to add as `origin` (saved to the config file)
    #[arg(long)]
    pub remote: Option<String>,
}

impl InitCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing init command");

        std::fs::create_dir_all(&config.registry)?;

        let git = Git::new(&config.registry);
        if git.is_repo() {
            tracing::debug!("{:?} is already a git repository", config.registry);
        } else {
            git.init()?;
        }

        if let Some(remote) = self.remote.as_deref().or(config.remote.as_deref()) {
            if git.has_remote(ORIGIN)? {
                tracing::warn!("Remote '{}' already exists, leaving it unchanged", ORIGIN);
            } else {
                git.add_remote(ORIGIN, remote)?;
            }
        }

        if self.remote.is_some() {
            let mut saved = config.clone();
            saved.remote = self.remote.clone();
            saved.save()?;
        }

        println!("Initialized prompt registry at {}", config.registry.display());
        Ok(())
    }
}
