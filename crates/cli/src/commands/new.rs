//! New command handler.
//!
//! Writes a fresh versioned prompt file into the registry.

use crate::editor::open_in_editor;
use clap::Args;
use promptctl_core::{config::AppConfig, AppError, AppResult};
use promptctl_prompt::{
    parse_version, sanitize_name, types::NO_DESCRIPTION, Parsed, PromptRecord, PromptResolver,
    INITIAL_VERSION,
};
use std::path::PathBuf;

/// Create a new prompt
#[derive(Args, Debug)]
pub struct NewCommand {
    /// Prompt name (lowercased, non-alphanumerics become hyphens)
    pub name: String,

    /// Namespace (folder) to create the prompt in
    #[arg(short, long)]
    pub namespace: String,

    /// One-line description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Author (default: config `author`)
    #[arg(short, long)]
    pub author: Option<String>,

    /// Tags (repeatable or comma separated)
    #[arg(short, long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Initial version
    #[arg(long, default_value_t = INITIAL_VERSION.to_string())]
    pub version: String,

    /// Prompt body
    #[arg(short, long, conflicts_with = "file")]
    pub content: Option<String>,

    /// Read the prompt body from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Do not open the editor when no body was given
    #[arg(long)]
    pub no_edit: bool,
}

impl NewCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing new command");
        tracing::debug!("New command options: {:?}", self);

        let record = self.build_record(config)?;
        let path = PromptResolver::new(&config.registry).save(&record, false)?;

        if self.content.is_none() && self.file.is_none() && !self.no_edit {
            open_in_editor(&path, config.editor.as_deref())?;
        }

        println!("Created {} at {}", record.specifier(), path.display());
        Ok(())
    }

    fn build_record(&self, config: &AppConfig) -> AppResult<PromptRecord> {
        let name = sanitize_name(&self.name);
        if name.is_empty() {
            return Err(AppError::Prompt(format!(
                "'{}' has no usable characters for a prompt name",
                self.name
            )));
        }

        let version = match parse_version(&self.version) {
            Parsed::Exact(version) => version,
            Parsed::Defaulted(_) => {
                return Err(AppError::Prompt(format!(
                    "Invalid version '{}', expected MAJOR.MINOR.PATCH",
                    self.version
                )))
            }
        };

        let content = match (&self.content, &self.file) {
            (Some(content), _) => content.clone(),
            (None, Some(file)) => std::fs::read_to_string(file)?,
            (None, None) => String::new(),
        };

        let tags = self
            .tags
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(PromptRecord {
            name,
            namespace: self.namespace.clone(),
            version: version.to_string(),
            author: self
                .author
                .clone()
                .unwrap_or_else(|| config.author_or_default().to_string()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            created: chrono::Local::now().format("%Y-%m-%d").to_string(),
            tags,
            content: content.trim_end().to_string(),
            source_path: PathBuf::new(),
        })
    }
}
