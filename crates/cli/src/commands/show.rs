//! Show command handler.

use crate::commands::resolve_one;
use crate::interact::Interaction;
use clap::Args;
use promptctl_core::{config::AppConfig, AppResult};

/// Show one prompt
#[derive(Args, Debug)]
pub struct ShowCommand {
    /// Prompt specifier: name, namespace/name, name@version or name@latest
    pub spec: String,

    /// Print only the prompt body
    #[arg(long)]
    pub body: bool,

    /// Output as JSON
    #[arg(long, conflicts_with = "body")]
    pub json: bool,
}

impl ShowCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing show command for '{}'", self.spec);

        let record = resolve_one(config, &self.spec, Interaction::detect())?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else if self.body {
            println!("{}", record.content);
        } else {
            println!("{}", record.specifier());
            println!("  Author:      {}", record.author);
            println!("  Description: {}", record.description);
            println!("  Created:     {}", record.created);
            if !record.tags.is_empty() {
                println!("  Tags:        {}", record.tags.join(", "));
            }
            println!("  File:        {}", record.source_path.display());
            println!();
            println!("{}", record.content);
        }

        Ok(())
    }
}
