//! Error types for sortviz.
//!
//! All fallible operations return `Result<T, VizError>` instead of
//! panicking. The taxonomy is deliberately small: the only contract
//! violation the algorithms themselves can report is `InvalidInput`
//! (an empty array reaching counting sort's maximum search); everything
//! else is configuration or terminal I/O.

use thiserror::Error;

/// Result type alias for sortviz operations.
pub type VizResult<T> = Result<T, VizError>;

/// Unified error type for all sortviz operations.
#[derive(Debug, Error)]
pub enum VizError {
    /// An algorithm received input it cannot operate on.
    ///
    /// Treated as a programming-contract violation: the playback driver
    /// never produces empty arrays, so hitting this means a caller broke
    /// the contract, not that the user did anything wrong.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of the contract violation.
        message: String,
    },

    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Terminal or file I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl VizError {
    /// Create an invalid-input error with a message.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an I/O error with a message (wraps in `std::io::Error`).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(std::io::Error::other(message.into()))
    }

    /// Check if this error is an input-contract violation.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
