//! List command handler.

use clap::Args;
use promptctl_core::{config::AppConfig, AppResult};
use promptctl_prompt::{sort_records, PromptRecord, PromptResolver};

/// List prompts
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Only prompts in this namespace
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Only prompts carrying this tag
    #[arg(short, long)]
    pub tag: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing list command");

        let records = self.collect(config)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        if records.is_empty() {
            println!(
                "No prompts found in {}. Create one with 'promptctl new'.",
                config.registry.display()
            );
            return Ok(());
        }

        for record in &records {
            println!("{}", format_line(record));
        }

        Ok(())
    }

    fn collect(&self, config: &AppConfig) -> AppResult<Vec<PromptRecord>> {
        let mut records: Vec<PromptRecord> = PromptResolver::new(&config.registry)
            .list_all()?
            .into_iter()
            .filter(|r| self.namespace.as_ref().map_or(true, |ns| &r.namespace == ns))
            .filter(|r| self.tag.as_ref().map_or(true, |tag| r.tags.contains(tag)))
            .collect();

        sort_records(&mut records);
        Ok(records)
    }
}

fn format_line(record: &PromptRecord) -> String {
    let mut line = format!("{:<40} {}", record.specifier().to_string(), record.description);
    if !record.tags.is_empty() {
        line.push_str(&format!(" [{}]", record.tags.join(", ")));
    }
    line
}
