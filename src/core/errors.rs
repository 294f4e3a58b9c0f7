//! Shared error types for the I/O edges of the crate.
//!
//! Grouping and scoring are total functions and never produce these; they
//! only come from reading input documents and configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mario-pricing operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Input document could not be decoded
    #[error("Invalid input in {}: {message}", .path.display())]
    Input { path: PathBuf, message: String },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Wrap an I/O failure on a specific path
    pub fn io_at(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::FileSystem {
            message: format!("cannot access {}", path.display()),
            path: Some(path),
            source: Some(source),
        }
    }

    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_prefixes_message() {
        let err = Error::input("orgs.json", "missing orgs").with_context("comparing MRI prices");
        assert_eq!(
            err.to_string(),
            "comparing MRI prices: Invalid input in orgs.json: missing orgs"
        );
    }

    #[test]
    fn test_input_error_names_path() {
        let err = Error::input("orgs.json", "expected an array");
        assert_eq!(err.to_string(), "Invalid input in orgs.json: expected an array");
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(Error::input("orgs.json", "bad"));
        let err = result.context("reading config").unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
    }
}
