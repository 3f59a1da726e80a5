//! Edit command handler.
//!
//! By default an edit produces a new version: the resolved prompt is copied
//! to `<name>-<bumped>.md` and the copy is opened in the editor. `--in-place`
//! edits the resolved file directly.

use crate::commands::resolve_one;
use crate::editor::open_in_editor;
use crate::interact::Interaction;
use clap::Args;
use promptctl_core::{config::AppConfig, AppResult};
use promptctl_prompt::{bump, BumpKind, PromptRecord, PromptResolver};
use std::path::PathBuf;

/// Edit a prompt, creating a new version by default
#[derive(Args, Debug)]
pub struct EditCommand {
    /// Prompt specifier: name, namespace/name, name@version or name@latest
    pub spec: String,

    /// Version component to bump (asked interactively when omitted)
    #[arg(short, long)]
    pub bump: Option<BumpKind>,

    /// Edit the existing file instead of creating a new version
    #[arg(long, conflicts_with = "bump")]
    pub in_place: bool,

    /// Create the new version without opening the editor
    #[arg(long)]
    pub no_edit: bool,
}

impl EditCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing edit command for '{}'", self.spec);

        let interaction = Interaction::detect();
        let record = resolve_one(config, &self.spec, interaction)?;

        if self.in_place {
            open_in_editor(&record.source_path, config.editor.as_deref())?;
            println!("Edited {}", record.specifier());
            return Ok(());
        }

        let kind = match self.bump {
            Some(kind) => kind,
            None => interaction.ask_bump(&record.version)?,
        };

        let (bumped, path) = create_version(config, &record, kind)?;

        if !self.no_edit {
            open_in_editor(&path, config.editor.as_deref())?;
        }

        println!(
            "Created {} from {}",
            bumped.specifier(),
            record.specifier()
        );
        Ok(())
    }
}

/// Copy a record to its bumped version. Returns the new record and its path.
fn create_version(
    config: &AppConfig,
    record: &PromptRecord,
    kind: BumpKind,
) -> AppResult<(PromptRecord, PathBuf)> {
    let version = bump(&record.version, kind);
    tracing::debug!("Bumping {} ({}) to {}", record.version, kind, version);

    let mut bumped = PromptRecord {
        version: version.to_string(),
        ..record.clone()
    };

    let path = PromptResolver::new(&config.registry).save(&bumped, false)?;
    bumped.source_path = path.clone();
    Ok((bumped, path))
}
