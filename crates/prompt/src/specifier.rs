//! Prompt specifiers: `name`, `namespace/name`, `name@1.2.0`,
//! `namespace/name@1.2.0` and `name@latest`.

use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Version keyword that selects the highest available version.
pub const LATEST: &str = "latest";

/// Version part of a specifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum VersionSelector {
    /// Match this version string exactly
    Exact(String),
    /// Pick the highest version among the matches
    Latest,
}

impl fmt::Display for VersionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSelector::Exact(v) => f.write_str(v),
            VersionSelector::Latest => f.write_str(LATEST),
        }
    }
}

/// A parsed user query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptSpecifier {
    pub namespace: Option<String>,
    pub name: String,
    pub version: Option<VersionSelector>,
}

impl PromptSpecifier {
    /// Specifier for an exact name, with no namespace or version constraint.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            namespace: None,
            name: name.into(),
            version: None,
        }
    }
}

/// Split a raw specifier.
///
/// The version is whatever follows the last `@`; the namespace is whatever
/// precedes the first `/` of the remainder. No character validation happens
/// here: a bad name simply matches nothing later. An empty version (`name@`)
/// is treated as no version.
pub fn parse_specifier(raw: &str) -> PromptSpecifier {
    let (path, version) = match raw.rsplit_once('@') {
        Some((path, version)) => (path, Some(version)),
        None => (raw, None),
    };

    let version = version.filter(|v| !v.is_empty()).map(|v| {
        if v == LATEST {
            VersionSelector::Latest
        } else {
            VersionSelector::Exact(v.to_string())
        }
    });

    let (namespace, name) = match path.split_once('/') {
        Some((namespace, name)) => (Some(namespace.to_string()), name.to_string()),
        None => (None, path.to_string()),
    };

    PromptSpecifier {
        namespace,
        name,
        version,
    }
}

impl FromStr for PromptSpecifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_specifier(s))
    }
}

impl fmt::Display for PromptSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(namespace) = &self.namespace {
            write!(f, "{}/", namespace)?;
        }
        f.write_str(&self.name)?;
        if let Some(version) = &self.version {
            write!(f, "@{}", version)?;
        }
        Ok(())
    }
}
