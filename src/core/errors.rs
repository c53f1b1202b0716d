//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Language identifier not present in the language table
    #[error("Unsupported language: {language}")]
    UnsupportedLanguage {
        /// Identifier as supplied by the caller
        language: String,
    },

    /// Nothing to translate
    #[error("Source text is empty")]
    EmptyInput,

    /// API request failed with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body or reason
        message: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Underlying transport failure
        message: String,
    },

    /// Response body did not have a recognizable shape
    #[error("Parse error: {message}")]
    ParseError {
        /// What was missing from the body
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Cancelled by the caller
    #[error("Translation cancelled")]
    Cancelled,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Offending setting
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

impl TranslationError {
    /// Map a reqwest failure onto the timeout / network split
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TranslationError::TimeoutError
        } else {
            TranslationError::NetworkError {
                message: err.to_string(),
            }
        }
    }

    /// Short machine-readable code, used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            TranslationError::UnsupportedLanguage { .. } => "unsupported_language",
            TranslationError::EmptyInput => "empty_input",
            TranslationError::ApiError { .. } => "api_error",
            TranslationError::NetworkError { .. } | TranslationError::HttpError(_) => {
                "network_error"
            }
            TranslationError::ParseError { .. } => "parse_error",
            TranslationError::TimeoutError => "timeout",
            TranslationError::Cancelled => "cancelled",
            TranslationError::ConfigError { .. } => "config_error",
        }
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
