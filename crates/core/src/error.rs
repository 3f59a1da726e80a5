//! Error types for the promptctl CLI.
//!
//! This module defines a unified error enum that covers all error categories
//! in the application. "Not found" is deliberately absent: a missing prompt
//! is a resolution outcome, not an error, until a command decides otherwise.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for resolution failures and other command-level errors.
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for I/O failures.
pub const EXIT_IO: u8 = 2;

/// Unified error type for the promptctl CLI.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A path exists but could not be read (permissions, broken mount...)
    #[error("Cannot read {path:?}: {source}")]
    NotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed prompt files or prompt input
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// A specifier did not resolve to exactly one prompt
    #[error("{0}")]
    Resolution(String),

    /// Failures of the external git client
    #[error("Git error: {0}")]
    Git(String),

    /// Failures launching or running the external editor
    #[error("Editor error: {0}")]
    Editor(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Process exit code for this error: 2 for I/O failures, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Io(_) | AppError::NotReadable { .. } => EXIT_IO,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let io = AppError::Io(std::io::Error::other("disk"));
        assert_eq!(io.exit_code(), EXIT_IO);

        let unreadable = AppError::NotReadable {
            path: PathBuf::from("/registry/web"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(unreadable.exit_code(), EXIT_IO);

        assert_eq!(
            AppError::Resolution("no prompt".to_string()).exit_code(),
            EXIT_FAILURE
        );
        assert_eq!(AppError::Git("push".to_string()).exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_not_readable_message_names_path() {
        let err = AppError::NotReadable {
            path: PathBuf::from("/registry/web"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/registry/web"));
    }
}
