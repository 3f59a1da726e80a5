//! Values that may have been filled in with a default.

use serde::Serialize;

/// A parsed value, tagged with whether the input was used as-is or a
/// fallback was substituted for missing or malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Parsed<T> {
    /// The input parsed cleanly.
    Exact(T),
    /// Some or all of the input was missing or malformed.
    Defaulted(T),
}

impl<T> Parsed<T> {
    pub fn value(&self) -> &T {
        match self {
            Parsed::Exact(v) | Parsed::Defaulted(v) => v,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Parsed::Exact(v) | Parsed::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Parsed::Defaulted(_))
    }
}
