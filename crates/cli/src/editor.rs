//! Opening prompt files in the user's editor.

use promptctl_core::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

/// Open a file in the user's preferred editor and wait for it to exit.
///
/// The editor comes from the config `editor` setting, then `$VISUAL`, then
/// `$EDITOR`. Commands with arguments (e.g. `"code -w"`) are split on
/// whitespace.
pub fn open_in_editor(path: &Path, configured: Option<&str>) -> AppResult<()> {
    let editor = configured
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .ok_or_else(|| {
            AppError::Editor(
                "No editor configured. Set $EDITOR or $VISUAL, or `editor` in the config file"
                    .to_string(),
            )
        })?;

    let (program, args) = split_command(&editor)?;
    tracing::debug!("Opening {:?} with {}", path, program);

    let status = Command::new(program)
        .args(args)
        .arg(path)
        .status()
        .map_err(|e| AppError::Editor(format!("Failed to launch editor '{}': {}", program, e)))?;

    if !status.success() {
        return Err(AppError::Editor(format!(
            "Editor '{}' exited with status {}",
            program,
            status.code().unwrap_or(-1)
        )));
    }

    Ok(())
}

fn split_command(editor: &str) -> AppResult<(&str, Vec<&str>)> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| AppError::Editor("Editor command is empty".to_string()))?;
    Ok((program, parts.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command() {
        let (program, args) = split_command("code -w --new-window").unwrap();
        assert_eq!(program, "code");
        assert_eq!(args, ["-w", "--new-window"]);
    }

    #[test]
    fn test_split_empty_command() {
        assert!(matches!(split_command("   "), Err(AppError::Editor(_))));
    }

    #[test]
    fn test_configured_editor_runs() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("prompt.md");
        std::fs::write(&path, "x").unwrap();

        // `true` ignores its arguments and exits 0
        assert!(open_in_editor(&path, Some("true")).is_ok());
        assert!(matches!(
            open_in_editor(&path, Some("false")),
            Err(AppError::Editor(_))
        ));
    }
}
