//! Prompt registry library for the promptctl CLI.
//!
//! This crate provides:
//! - Frontmatter parsing for prompt files
//! - `MAJOR.MINOR.PATCH` version comparison and bumping
//! - Prompt specifier parsing (`namespace/name@version`)
//! - Resolution of specifiers against a registry directory
//!
//! It never prints and never exits; commands decide how to present
//! [`Resolution`] outcomes and errors.

pub mod frontmatter;
pub mod parsed;
pub mod resolver;
pub mod specifier;
pub mod types;
pub mod version;

// Re-export main types
pub use frontmatter::{missing_required_keys, parse_frontmatter, FieldValue, Frontmatter};
pub use parsed::Parsed;
pub use resolver::{
    load_record, select, sort_by_version_desc, sort_records, InvalidPromptFile, PromptResolver,
    Resolution,
};
pub use specifier::{parse_specifier, PromptSpecifier, VersionSelector};
pub use types::{sanitize_name, split_versioned_stem, PromptRecord};
pub use version::{bump, compare, parse_version, BumpKind, Version, INITIAL_VERSION};
