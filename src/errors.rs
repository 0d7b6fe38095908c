//! Error types for rapid_summarize
//!
//! Every fallible operation in the crate returns [`Result`], so callers can
//! tell a failed call apart from a valid summary.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Main error type for rapid_summarize
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    /// Input text is empty or whitespace-only
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration validation failed (e.g. a sentence count of zero)
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Normalization resources (stop-word lists) could not be initialized
    #[error("Resource unavailable: {message}")]
    ResourceUnavailable { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SummarizeError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a resource unavailable error
    pub fn resource_unavailable(message: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the document itself
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Whether the error was caused by caller-supplied settings
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. } | Self::Serialization { .. })
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummarizeError::invalid_input("empty text provided");
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("empty text provided"));

        let err = SummarizeError::resource_unavailable("no stop-words for 'xx'");
        assert_eq!(
            err.to_string(),
            "Resource unavailable: no stop-words for 'xx'"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert!(SummarizeError::invalid_input("x").is_input_error());
        assert!(!SummarizeError::invalid_input("x").is_config_error());
        assert!(SummarizeError::invalid_config("x").is_config_error());
        assert!(!SummarizeError::resource_unavailable("x").is_config_error());
    }

    #[test]
    fn test_from_serde_json() {
        let err: SummarizeError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, SummarizeError::Serialization { .. }));
    }
}
