//! Command handlers for the promptctl CLI.
//!
//! This module organizes all CLI commands into separate submodules.

pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod new;
pub mod pull;
pub mod push;
pub mod show;
pub mod status;
pub mod sync;

// Re-export command types for convenience
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use new::NewCommand;
pub use pull::PullCommand;
pub use push::PushCommand;
pub use show::ShowCommand;
pub use status::StatusCommand;
pub use sync::SyncCommand;

use crate::interact::Interaction;
use promptctl_core::{config::AppConfig, AppResult};
use promptctl_prompt::{parse_specifier, PromptRecord, PromptResolver};

/// Resolve a specifier to exactly one prompt, asking the user when several match.
pub(crate) fn resolve_one(
    config: &AppConfig,
    raw: &str,
    interaction: Interaction,
) -> AppResult<PromptRecord> {
    let spec = parse_specifier(raw);
    let resolution = PromptResolver::new(&config.registry).resolve(&spec)?;
    interaction.pick(resolution, &spec)
}


#[cfg(test)]
mod tests {
    use super::test_support::{config_in, write_prompt};
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_one_unique_and_missing() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());
        write_prompt(&config, "web", "foo", "1.0.0");

        let record = resolve_one(&config, "web/foo", Interaction::disabled()).unwrap();
        assert_eq!(record.version, "1.0.0");

        let err = resolve_one(&config, "bar", Interaction::disabled()).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
