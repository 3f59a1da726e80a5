//! Status command handler.
//!
//! Summarizes the registry: prompt counts per namespace, files that would
//! fail validation on push, and uncommitted git changes.

use crate::git::Git;
use clap::Args;
use promptctl_core::{config::AppConfig, AppResult};
use promptctl_prompt::{InvalidPromptFile, PromptResolver};
use std::collections::BTreeMap;

/// Show registry status
#[derive(Args, Debug)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug)]
struct RegistryStatus {
    exists: bool,
    namespaces: BTreeMap<String, usize>,
    invalid: Vec<InvalidPromptFile>,
    git: Option<String>,
}

impl StatusCommand {
    pub fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Executing status command");

        let status = gather(config)?;

        if self.json {
            let invalid: Vec<serde_json::Value> = status
                .invalid
                .iter()
                .map(|f| serde_json::json!({ "path": f.path, "missing": f.missing }))
                .collect();
            let output = serde_json::json!({
                "registry": config.registry,
                "exists": status.exists,
                "namespaces": status.namespaces,
                "invalid": invalid,
                "git": status.git,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            return Ok(());
        }

        println!("Registry: {}", config.registry.display());
        if !status.exists {
            println!("Not initialized. Run 'promptctl init'.");
            return Ok(());
        }

        let total: usize = status.namespaces.values().sum();
        println!("Prompts:  {}", total);
        for (namespace, count) in &status.namespaces {
            println!("  {:<20} {}", namespace, count);
        }

        if !status.invalid.is_empty() {
            println!("Invalid files:");
            for file in &status.invalid {
                println!(
                    "  {} (missing: {})",
                    file.path.display(),
                    file.missing.join(", ")
                );
            }
        }

        match status.git.as_deref() {
            None => println!("Git:      not a repository"),
            Some("") => println!("Git:      clean"),
            Some(changes) => {
                println!("Git:      uncommitted changes");
                for line in changes.lines() {
                    println!("  {}", line);
                }
            }
        }

        Ok(())
    }
}

fn gather(config: &AppConfig) -> AppResult<RegistryStatus> {
    let resolver = PromptResolver::new(&config.registry);
    let exists = config.registry.is_dir();

    let mut namespaces: BTreeMap<String, usize> = resolver
        .namespaces()?
        .into_iter()
        .map(|ns| (ns, 0))
        .collect();
    for record in resolver.list_all()? {
        *namespaces.entry(record.namespace).or_default() += 1;
    }

    let git = Git::new(&config.registry);
    let git_status = if exists && git.is_repo() {
        Some(git.status_short()?)
    } else {
        None
    };

    Ok(RegistryStatus {
        exists,
        namespaces,
        invalid: resolver.invalid_files()?,
        git: git_status,
    })
}
