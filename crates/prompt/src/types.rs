//! Prompt types for the promptctl CLI.
//!
//! This module defines [`PromptRecord`], one versioned prompt file, along with
//! the helpers that map between records, file names and file text.

use crate::frontmatter::Frontmatter;
use crate::parsed::Parsed;
use crate::specifier::{PromptSpecifier, VersionSelector};
use crate::version::{parse_version, Version, INITIAL_VERSION};
use serde::Serialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// File extension of prompt files.
pub const PROMPT_EXTENSION: &str = "md";

pub const UNKNOWN_AUTHOR: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description";
pub const UNKNOWN_CREATED: &str = "Unknown";

/// One versioned prompt file.
///
/// Records are derived from the filesystem on every lookup and never cached;
/// `source_path` points back at the file for edits and deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptRecord {
    pub name: String,
    pub namespace: String,
    pub version: String,
    pub author: String,
    pub description: String,
    pub created: String,
    pub tags: Vec<String>,
    pub content: String,
    pub source_path: PathBuf,
}

impl PromptRecord {
    /// Build a record from parsed frontmatter, filling gaps from the file path.
    ///
    /// - `name` and `version` fall back to the file name (`name-1.2.0.md`),
    ///   and `version` to `1.0.0` for legacy `name.md` files
    /// - `namespace` falls back to the parent directory name
    /// - `author`, `description` and `created` fall back to sentinels
    ///
    /// Text values lose one matching pair of surrounding quotes. The body is
    /// kept verbatim apart from the blank line that follows the closing
    /// delimiter.
    pub fn from_frontmatter(frontmatter: &Frontmatter, path: &Path) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (stem_name, stem_version) = split_versioned_stem(&stem);

        let text = |key: &str| frontmatter.get(key).map(|v| unquote(v).to_string());

        let namespace = text("namespace").unwrap_or_else(|| {
            path.parent()
                .and_then(Path::file_name)
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        Self {
            name: text("name").unwrap_or_else(|| stem_name.to_string()),
            namespace,
            version: text("version")
                .or_else(|| stem_version.map(str::to_string))
                .unwrap_or_else(|| INITIAL_VERSION.to_string()),
            author: text("author").unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
            description: text("description").unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            created: text("created").unwrap_or_else(|| UNKNOWN_CREATED.to_string()),
            tags: frontmatter.tags().into_value(),
            content: strip_separator(&frontmatter.body).to_string(),
            source_path: path.to_path_buf(),
        }
    }

    /// Decoded version.
    pub fn parsed_version(&self) -> Parsed<Version> {
        parse_version(&self.version)
    }

    /// Fully qualified specifier for this exact record.
    pub fn specifier(&self) -> PromptSpecifier {
        PromptSpecifier {
            namespace: Some(self.namespace.clone()),
            name: self.name.clone(),
            version: Some(VersionSelector::Exact(self.version.clone())),
        }
    }

    /// Versioned file name: `<name>-<version>.md`.
    pub fn file_name(&self) -> String {
        versioned_file_name(&self.name, &self.version)
    }

    /// Text fields that cannot be written as a single `key: value` line.
    pub fn multiline_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("namespace", &self.namespace),
            ("version", &self.version),
            ("author", &self.author),
            ("description", &self.description),
            ("created", &self.created),
        ]
        .into_iter()
        .filter(|(_, value)| value.contains(['\n', '\r']))
        .map(|(key, _)| key)
        .collect()
    }

    /// Render the record in the on-disk prompt format.
    ///
    /// Values that would lose characters on the way back through
    /// [`from_frontmatter`](Self::from_frontmatter) are wrapped in quotes.
    pub fn to_file_string(&self) -> String {
        let tags = self
            .tags
            .iter()
            .map(|t| serde_json::Value::String(t.clone()).to_string())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "---\n\
             name: {}\n\
             namespace: {}\n\
             version: {}\n\
             author: {}\n\
             description: {}\n\
             created: {}\n\
             tags: [{}]\n\
             ---\n\
             \n\
             {}\n",
            quote_if_needed(&self.name),
            quote_if_needed(&self.namespace),
            quote_if_needed(&self.version),
            quote_if_needed(&self.author),
            quote_if_needed(&self.description),
            quote_if_needed(&self.created),
            tags,
            self.content
        )
    }
}

/// `<name>-<version>.md`
pub fn versioned_file_name(name: &str, version: &str) -> String {
    format!("{}-{}.{}", name, version, PROMPT_EXTENSION)
}

/// `<name>.md`, the pre-versioning naming convention.
pub fn legacy_file_name(name: &str) -> String {
    format!("{}.{}", name, PROMPT_EXTENSION)
}

/// Split a file stem into name and version: `"foo-1.2.0"` gives
/// `("foo", Some("1.2.0"))`, a legacy `"foo"` gives `("foo", None)`.
pub fn split_versioned_stem(stem: &str) -> (&str, Option<&str>) {
    match stem.rsplit_once('-') {
        Some((name, version)) if !name.is_empty() && !parse_version(version).is_defaulted() => {
            (name, Some(version))
        }
        _ => (stem, None),
    }
}

/// Reduce a raw name to lowercase letters, digits and single hyphens.
///
/// Whitespace and underscores become hyphens; anything else outside
/// `[a-z0-9-]` is dropped.
pub fn sanitize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for ch in raw.chars().flat_map(char::to_lowercase) {
        let mapped = match ch {
            'a'..='z' | '0'..='9' => ch,
            '-' | '_' => '-',
            c if c.is_whitespace() => '-',
            _ => continue,
        };
        if mapped == '-' && (out.is_empty() || out.ends_with('-')) {
            continue;
        }
        out.push(mapped);
    }

    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Body without the blank separator line written after the closing delimiter.
fn strip_separator(body: &str) -> &str {
    body.strip_prefix('\n').unwrap_or(body)
}

/// Wrap a value in `"` when reading it back would otherwise strip quotes or
/// leading whitespace.
fn quote_if_needed(value: &str) -> Cow<'_, str> {
    if unquote(value) != value || value.starts_with(char::is_whitespace) {
        Cow::Owned(format!("\"{}\"", value))
    } else {
        Cow::Borrowed(value)
    }
}

/// Strip one matching pair of surrounding `"` or `'`.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
