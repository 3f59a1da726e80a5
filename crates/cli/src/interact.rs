//! Terminal interaction: picking among ambiguous prompts, confirmations and
//! version bump questions.

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use promptctl_core::{AppError, AppResult};
use promptctl_prompt::{BumpKind, PromptRecord, PromptSpecifier, Resolution};
use std::io::{self, IsTerminal};

/// Whether questions may be asked. Without a terminal on stdin, anything
/// that would need an answer becomes an error instead.
#[derive(Debug, Clone, Copy)]
pub struct Interaction {
    interactive: bool,
}

impl Interaction {
    pub fn detect() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    #[cfg(test)]
    pub fn disabled() -> Self {
        Self { interactive: false }
    }

    /// Turn a resolution into exactly one record, asking the user to pick
    /// when several match.
    pub fn pick(&self, resolution: Resolution, spec: &PromptSpecifier) -> AppResult<PromptRecord> {
        let candidates = match resolution {
            Resolution::Ambiguous(candidates) if self.interactive => candidates,
            other => return other.into_unique(spec),
        };

        let labels: Vec<String> = candidates.iter().map(candidate_label).collect();
        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Several prompts match '{}', pick one", spec))
            .items(&labels)
            .default(0)
            .interact()
            .map_err(prompt_error)?;

        candidates
            .into_iter()
            .nth(index)
            .ok_or_else(|| AppError::Other(format!("Invalid selection {}", index)))
    }

    /// Ask a yes/no question. Without a terminal the answer is no.
    pub fn confirm(&self, question: &str) -> AppResult<bool> {
        if !self.interactive {
            return Ok(false);
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(prompt_error)
    }

    /// Ask for a bump kind until a valid one is entered.
    pub fn ask_bump(&self, current: &str) -> AppResult<BumpKind> {
        if !self.interactive {
            return Err(AppError::Other(
                "No terminal to ask for a version bump; pass --bump major|minor|patch".to_string(),
            ));
        }

        loop {
            let answer: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Bump {} by (major/minor/patch)", current))
                .default(BumpKind::Patch.to_string())
                .interact_text()
                .map_err(prompt_error)?;

            match answer.parse::<BumpKind>() {
                Ok(kind) => return Ok(kind),
                Err(e) => eprintln!("{}", e),
            }
        }
    }
}

fn candidate_label(record: &PromptRecord) -> String {
    format!("{}  {}", record.specifier(), record.description)
}

fn prompt_error(err: dialoguer::Error) -> AppError {
    AppError::Other(format!("Terminal prompt failed: {}", err))
}
