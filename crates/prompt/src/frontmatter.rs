//! Frontmatter parsing for prompt files.
//!
//! A prompt file starts with a metadata block bounded by two `---` lines:
//!
//! ```text
//! ---
//! name: code-review
//! namespace: web
//! version: 1.2.0
//! tags: ["review", "quality"]
//! ---
//!
//! Review the following diff...
//! ```
//!
//! Parsing is line based and never fails on malformed content: lines that do
//! not look like `key: value` are skipped, and an undecodable `tags` value
//! becomes an empty list. The only "no result" case is a file that does not
//! contain two delimiter lines at all.

use crate::parsed::Parsed;
use std::collections::BTreeMap;

/// Delimiter line that opens and closes the metadata block.
pub const DELIMITER: &str = "---";

/// Key whose value is decoded as a JSON array of strings.
pub const TAGS_KEY: &str = "tags";

/// Keys that must be present for a prompt file to be committed.
pub const REQUIRED_KEYS: [&str; 6] = [
    "name",
    "namespace",
    "version",
    "author",
    "description",
    "created",
];

/// A single metadata value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Raw text, exactly as written after the colon
    Text(String),
    /// Decoded `tags` array
    Tags(Parsed<Vec<String>>),
}

/// Metadata block and body of a prompt file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub metadata: BTreeMap<String, FieldValue>,
    pub body: String,
}

impl Frontmatter {
    /// Raw text value for `key`. Returns `None` for missing keys and for `tags`.
    pub fn get(&self, key: &str) -> Option<&str> {
        match self.metadata.get(key) {
            Some(FieldValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Decoded tags; `Defaulted(vec![])` when the key is absent.
    pub fn tags(&self) -> Parsed<Vec<String>> {
        match self.metadata.get(TAGS_KEY) {
            Some(FieldValue::Tags(tags)) => tags.clone(),
            _ => Parsed::Defaulted(Vec::new()),
        }
    }
}

/// Parse file text into metadata and body.
///
/// Returns `None` when the text does not contain two delimiter lines; such a
/// file is simply not a prompt.
pub fn parse_frontmatter(text: &str) -> Option<Frontmatter> {
    let lines: Vec<&str> = text.lines().collect();
    let (start, end) = delimiter_bounds(&lines)?;

    let mut metadata = BTreeMap::new();
    for line in &lines[start + 1..end] {
        let Some((key, raw)) = split_field(line) else {
            continue;
        };

        let value = if key == TAGS_KEY {
            FieldValue::Tags(parse_tags(raw))
        } else {
            FieldValue::Text(raw.to_string())
        };
        metadata.insert(key.to_string(), value);
    }

    let body = lines[end + 1..].join("\n");

    Some(Frontmatter { metadata, body })
}

/// Decode a JSON array literal of strings.
pub fn parse_tags(raw: &str) -> Parsed<Vec<String>> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(tags) => Parsed::Exact(tags),
        Err(e) => {
            tracing::debug!("Ignoring malformed tags value {:?}: {}", raw, e);
            Parsed::Defaulted(Vec::new())
        }
    }
}

/// Required keys that do not appear as `key:` at the start of a line inside
/// the metadata block. A file without frontmatter is missing all of them.
pub fn missing_required_keys(text: &str) -> Vec<&'static str> {
    let lines: Vec<&str> = text.lines().collect();
    let Some((start, end)) = delimiter_bounds(&lines) else {
        return REQUIRED_KEYS.to_vec();
    };
    let block = &lines[start + 1..end];

    REQUIRED_KEYS
        .iter()
        .copied()
        .filter(|key| {
            !block.iter().any(|line| {
                line.strip_prefix(key)
                    .is_some_and(|rest| rest.starts_with(':'))
            })
        })
        .collect()
}

/// Indices of the first two delimiter lines.
fn delimiter_bounds(lines: &[&str]) -> Option<(usize, usize)> {
    let mut delimiters = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim() == DELIMITER)
        .map(|(i, _)| i);

    let start = delimiters.next()?;
    let end = delimiters.next()?;
    Some((start, end))
}

/// Split `key: value` where the key is one or more word characters
/// (`[A-Za-z0-9_]`) starting at the beginning of the line.
fn split_field(line: &str) -> Option<(&str, &str)> {
    let key_len = line
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(line.len());
    if key_len == 0 {
        return None;
    }

    let rest = line[key_len..].strip_prefix(':')?;
    Some((&line[..key_len], rest.trim_start()))
}
