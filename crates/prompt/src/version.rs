//! `MAJOR.MINOR.PATCH` versions: parsing, ordering and bumping.
//!
//! Parsing never fails. Missing or non-numeric segments read as `0` and the
//! result is tagged [`Parsed::Defaulted`]; segments past the third are
//! ignored.

use crate::parsed::Parsed;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Version given to new prompts, and the result of bumping a malformed version.
pub const INITIAL_VERSION: Version = Version {
    major: 1,
    minor: 0,
    patch: 0,
};

/// A decoded version. Field order makes the derived `Ord` compare major,
/// then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Next version for the given bump, or `None` when the bumped component
    /// would overflow.
    pub fn bumped(self, kind: BumpKind) -> Option<Self> {
        let next = match kind {
            BumpKind::Major => Self::new(self.major.checked_add(1)?, 0, 0),
            BumpKind::Minor => Self::new(self.major, self.minor.checked_add(1)?, 0),
            BumpKind::Patch => Self::new(self.major, self.minor, self.patch.checked_add(1)?),
        };
        Some(next)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component of a version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            other => Err(format!(
                "invalid bump kind '{}', expected major, minor or patch",
                other
            )),
        }
    }
}

/// Parse a version string.
///
/// `"2.5"` gives `2.5.0`, `"abc"` gives `0.0.0`, `"1.2.3.4"` gives `1.2.3`.
/// Anything other than exactly three numeric segments is `Defaulted`.
pub fn parse_version(s: &str) -> Parsed<Version> {
    let segments: Vec<&str> = s.split('.').collect();
    let numbers: Vec<Option<u64>> = (0..3)
        .map(|i| segments.get(i).and_then(|seg| seg.trim().parse().ok()))
        .collect();

    let version = Version::new(
        numbers[0].unwrap_or(0),
        numbers[1].unwrap_or(0),
        numbers[2].unwrap_or(0),
    );

    if segments.len() == 3 && numbers.iter().all(Option::is_some) {
        Parsed::Exact(version)
    } else {
        Parsed::Defaulted(version)
    }
}

/// Compare two version strings numerically.
pub fn compare(a: &str, b: &str) -> Ordering {
    parse_version(a).value().cmp(parse_version(b).value())
}

/// Bump a version string. Input that is not exactly three numeric segments,
/// or whose bumped component would overflow, is not recovered; the result is
/// [`INITIAL_VERSION`] instead.
pub fn bump(version: &str, kind: BumpKind) -> Version {
    match parse_version(version) {
        Parsed::Exact(v) => v.bumped(kind).unwrap_or_else(|| {
            tracing::debug!("Bumping {} of {:?} overflows, resetting", kind, version);
            INITIAL_VERSION
        }),
        Parsed::Defaulted(_) => {
            tracing::debug!("Cannot bump malformed version {:?}, resetting", version);
            INITIAL_VERSION
        }
    }
}
