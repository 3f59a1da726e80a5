//! Delete command handler.

use crate::commands::resolve_one;
use crate::interact::Interaction;
use clap::Args;
use promptctl_core::{config::AppConfig, AppError, AppResult};
use promptctl_prompt::PromptResolver;

/// Delete a prompt version
#[derive(Args, Debug)]
pub struct DeleteCommand {
    /// Prompt specifier: name, namespace/name, name@version or name@latest
    pub spec: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl DeleteCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing delete command for '{}'", self.spec);

        let interaction = Interaction::detect();
        self.run(config, interaction)
    }

    fn run(&self, config: &AppConfig, interaction: Interaction) -> AppResult<()> {
        let record = resolve_one(config, &self.spec, interaction)?;

        if !self.yes {
            let question = format!("Delete {}?", record.specifier());
            if !interaction.confirm(&question)? {
                return Err(AppError::Other(format!(
                    "Not deleting {} (confirm interactively or pass --yes)",
                    record.specifier()
                )));
            }
        }

        PromptResolver::new(&config.registry).delete(&record)?;
        println!("Deleted {}", record.specifier());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{config_in, write_prompt};
    use tempfile::TempDir;

    #[test]
    fn test_delete_with_yes() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());
        write_prompt(&config, "web", "foo", "1.0.0");
        write_prompt(&config, "web", "foo", "2.0.0");

        let cmd = DeleteCommand {
            spec: "foo@1.0.0".to_string(),
            yes: true,
        };
        cmd.run(&config, Interaction::disabled()).unwrap();

        assert!(!config.registry.join("web/foo-1.0.0.md").exists());
        assert!(config.registry.join("web/foo-2.0.0.md").exists());
    }

    #[test]
    fn test_delete_without_confirmation_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());
        write_prompt(&config, "web", "foo", "1.0.0");

        let cmd = DeleteCommand {
            spec: "web/foo".to_string(),
            yes: false,
        };
        assert!(cmd.run(&config, Interaction::disabled()).is_err());
        assert!(config.registry.join("web/foo-1.0.0.md").exists());
    }

    #[test]
    fn test_delete_missing_prompt() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());

        let cmd = DeleteCommand {
            spec: "ghost".to_string(),
            yes: true,
        };
        let err = cmd.run(&config, Interaction::disabled()).unwrap_err();
        assert!(matches!(err, AppError::Resolution(_)));
    }
}
