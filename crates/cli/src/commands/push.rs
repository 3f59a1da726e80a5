//! Push command handler.
//!
//! Validates prompt files, commits them and pushes to `origin`.

use crate::commands::resolve_one;
use crate::git::{Git, ORIGIN};
use crate::interact::Interaction;
use clap::Args;
use promptctl_core::{config::AppConfig, AppError, AppResult};
use promptctl_prompt::{missing_required_keys, PromptResolver};
use std::path::Path;

/// Validate, commit and push prompts
#[derive(Args, Debug)]
pub struct PushCommand {
    /// Only push this prompt (default: every change in the registry)
    pub spec: Option<String>,

    /// Commit message
    #[arg(short, long)]
    pub message: Option<String>,
}

impl PushCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing push command");

        let git = open_repo(config)?;

        match &self.spec {
            Some(spec) => {
                let record = resolve_one(config, spec, Interaction::detect())?;
                ensure_valid_file(&record.source_path)?;
                let message = self
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("Update {}", record.specifier()));
                commit_and_push(&git, &[record.source_path.as_path()], &message)
            }
            None => push_all(config, &git, self.message.as_deref()),
        }
    }
}

/// The registry's git repository, or an error pointing at `init`.
pub(crate) fn open_repo(config: &AppConfig) -> AppResult<Git> {
    let git = Git::new(&config.registry);
    if !config.registry.is_dir() || !git.is_repo() {
        return Err(AppError::Git(format!(
            "{} is not a git repository. Run 'promptctl init' first",
            config.registry.display()
        )));
    }
    Ok(git)
}

/// Validate every prompt in the registry, then commit and push all changes.
pub(crate) fn push_all(config: &AppConfig, git: &Git, message: Option<&str>) -> AppResult<()> {
    let invalid = PromptResolver::new(&config.registry).invalid_files()?;
    if !invalid.is_empty() {
        let details = invalid
            .iter()
            .map(|f| format!("  {} (missing: {})", f.path.display(), f.missing.join(", ")))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(AppError::Prompt(format!(
            "Refusing to push invalid prompt files:\n{}",
            details
        )));
    }

    commit_and_push(git, &[], message.unwrap_or("Update prompts"))
}

fn ensure_valid_file(path: &Path) -> AppResult<()> {
    let text = std::fs::read_to_string(path)?;
    let missing = missing_required_keys(&text);
    if missing.is_empty() {
        return Ok(());
    }
    Err(AppError::Prompt(format!(
        "{} is missing required keys: {}",
        path.display(),
        missing.join(", ")
    )))
}

fn commit_and_push(git: &Git, paths: &[&Path], message: &str) -> AppResult<()> {
    git.add(paths)?;

    if git.has_staged_changes()? {
        git.commit(message)?;
        println!("Committed: {}", message);
    } else {
        println!("Nothing to commit");
    }

    if !git.has_remote(ORIGIN)? {
        tracing::warn!("No '{}' remote configured, skipping push", ORIGIN);
        println!("No remote configured; changes are committed locally only");
        return Ok(());
    }

    let output = git.push()?;
    if !output.is_empty() {
        println!("{}", output);
    }
    println!("Pushed to {}", ORIGIN);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{config_in, write_prompt};
    use tempfile::TempDir;

    #[test]
    fn test_open_repo_requires_git_repository() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());
        assert!(matches!(open_repo(&config), Err(AppError::Git(_))));
    }

    #[test]
    fn test_ensure_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());
        write_prompt(&config, "web", "foo", "1.0.0");
        assert!(ensure_valid_file(&config.registry.join("web/foo-1.0.0.md")).is_ok());

        let partial = config.registry.join("web/bar-1.0.0.md");
        std::fs::write(&partial, "---\nname: bar\n---\n").unwrap();
        let err = ensure_valid_file(&partial).unwrap_err();
        assert!(err.to_string().contains("namespace, version, author, description, created"));
    }

    #[test]
    fn test_push_all_rejects_invalid_files_before_git() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_in(temp_dir.path());
        write_prompt(&config, "web", "foo", "1.0.0");
        std::fs::write(
            config.registry.join("web/bar-1.0.0.md"),
            "---\nname: bar\n---\n",
        )
        .unwrap();

        let git = Git::new(&config.registry);
        let err = push_all(&config, &git, None).unwrap_err();
        assert!(matches!(err, AppError::Prompt(_)));
        assert!(err.to_string().contains("bar-1.0.0.md"));
    }
}
