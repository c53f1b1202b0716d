//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::errors::TranslationError;

/// Translation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,
    /// Source language name or code
    pub source_lang: String,
    /// Target language name or code
    pub target_lang: String,
}

impl TranslationRequest {
    /// Create a request from text and two language identifiers
    pub fn new(
        text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Successful translation payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Cleaned translated text
    pub text: String,
    /// `translate_tts` URL for the text
    pub speech_url: String,
    /// Resolved source provider code
    pub source_code: String,
    /// Resolved target provider code
    pub target_code: String,
}

/// Outcome of one translate call, with the time it took
#[derive(Debug)]
pub struct TranslationResult {
    /// Payload or failure cause
    pub outcome: Result<Translation, TranslationError>,
    /// Wall-clock time from start to completion
    pub elapsed: Duration,
}

impl TranslationResult {
    /// Translated text, empty on failure
    pub fn text(&self) -> &str {
        self.outcome.as_ref().map(|t| t.text.as_str()).unwrap_or("")
    }

    /// Speech URL, only present on success
    pub fn speech_url(&self) -> Option<&str> {
        self.outcome.as_ref().ok().map(|t| t.speech_url.as_str())
    }

    /// Failure cause, only present on failure
    pub fn error(&self) -> Option<&TranslationError> {
        self.outcome.as_ref().err()
    }

    /// Time the call took, on every path
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whether a translation was produced
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Drop the timing and keep the plain result
    pub fn into_result(self) -> Result<Translation, TranslationError> {
        self.outcome
    }
}
