//! Error types for symmetric_summarizer
//!
//! Only conditions that abort a run are errors. Short input, an empty
//! vocabulary and a document without eligible sentences are reported through
//! [`SummaryOutcome`](crate::types::SummaryOutcome) instead.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizerError>;

/// Main error type for symmetric_summarizer
#[derive(Error, Debug, Clone)]
pub enum SummarizerError {
    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A linguistic collaborator (segmenter, normalizer, detector) failed
    #[error("Collaborator failure in {stage}: {message}")]
    Collaborator { stage: String, message: String },

    /// An indicator template could not be parsed or compiled
    #[error("Template error ({aspect}): {message}")]
    Template { aspect: String, message: String },

    /// Input could not be read or output could not be written
    #[error("I/O error: {message}")]
    Io { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SummarizerError {
    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a collaborator failure for the named stage
    pub fn collaborator(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Collaborator {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Create a template error for the given aspect
    pub fn template(aspect: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Template {
            aspect: aspect.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error came from a linguistic collaborator
    pub fn is_collaborator_failure(&self) -> bool {
        matches!(self, Self::Collaborator { .. } | Self::Template { .. })
    }
}

impl From<serde_json::Error> for SummarizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for SummarizerError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<regex::Error> for SummarizerError {
    fn from(err: regex::Error) -> Self {
        Self::internal(format!("regex: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummarizerError::invalid_config("percentage must be in 1..=100");
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.to_string().contains("1..=100"));

        let err = SummarizerError::collaborator("segmenter", "bad input");
        assert!(err.to_string().contains("segmenter"));
        assert!(err.to_string().contains("bad input"));
    }

    #[test]
    fn test_is_collaborator_failure() {
        assert!(SummarizerError::collaborator("normalizer", "x").is_collaborator_failure());
        assert!(SummarizerError::template("Aim", "unbalanced").is_collaborator_failure());
        assert!(!SummarizerError::io("missing").is_collaborator_failure());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: SummarizerError = io.into();
        assert!(matches!(err, SummarizerError::Io { .. }));
    }
}
