//! Error types for the Iceberg sink configuration
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the sink configuration
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Parameter '{key}' expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: String,
        found: String,
    },

    // ============================================================================
    // Loader Errors
    // ============================================================================
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        key: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            key: key.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Check if this error came from coercing a parameter value
    pub fn is_coercion(&self) -> bool {
        matches!(
            self,
            Error::TypeMismatch { .. } | Error::InvalidConfigValue { .. }
        )
    }
}

/// Result type alias for the sink configuration
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_value("row-group-size", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'row-group-size': must be positive"
        );

        let err = Error::type_mismatch("partition-key-transform", "transform", "text");
        assert_eq!(
            err.to_string(),
            "Parameter 'partition-key-transform' expected transform, found text"
        );
    }

    #[test]
    fn test_is_coercion() {
        assert!(Error::invalid_value("a", "b").is_coercion());
        assert!(Error::type_mismatch("a", "int", "text").is_coercion());
        assert!(!Error::config("x").is_coercion());
        assert!(!Error::FileNotFound {
            path: "/nope".to_string()
        }
        .is_coercion());
    }
}
