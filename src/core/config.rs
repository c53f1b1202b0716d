//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default translation endpoint
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Default speech synthesis endpoint
pub const DEFAULT_TTS_ENDPOINT: &str = "https://translate.googleapis.com/translate_tts";

/// Browser user agent; the endpoint may reject default client agents
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/41.0.2228.0 Safari/537.36";

/// Default request timeout
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Configuration for translator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// `translate_a/single` URL, without query
    pub endpoint: String,
    /// `translate_tts` URL, without query
    pub tts_endpoint: String,
    /// Value of the `user-agent` header
    pub user_agent: String,
    /// Per-call timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            tts_endpoint: DEFAULT_TTS_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        let endpoint = std::env::var("GTX_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let tts_endpoint = std::env::var("GTX_TTS_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_TTS_ENDPOINT.to_string());

        let user_agent = std::env::var("GTX_USER_AGENT")
            .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        let timeout_ms = std::env::var("REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
            .parse::<u64>()?;

        Ok(Self {
            endpoint,
            tts_endpoint,
            user_agent,
            timeout_ms,
        })
    }

    /// Load and validate configuration from the environment
    pub fn load() -> anyhow::Result<Self> {
        let config = Self::from_env()?;
        config.validate()?;

        info!(
            "Translator configured for {} (timeout {}ms)",
            config.endpoint, config.timeout_ms
        );

        Ok(config)
    }

    /// Load from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.endpoint.is_empty() {
            return Err(anyhow::anyhow!("Translation endpoint is required"));
        }

        if self.tts_endpoint.is_empty() {
            return Err(anyhow::anyhow!("Speech endpoint is required"));
        }

        if self.user_agent.is_empty() {
            return Err(anyhow::anyhow!("User agent is required"));
        }

        if self.timeout_ms == 0 {
            return Err(anyhow::anyhow!("timeout_ms must be greater than 0"));
        }

        Ok(())
    }

    /// Override the request timeout
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TranslatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout_ms, 5000);
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn test_config_validation_missing_endpoint() {
        let config = TranslatorConfig {
            endpoint: "".to_string(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let config = TranslatorConfig::default().with_timeout_ms(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.json");

        let config = TranslatorConfig {
            endpoint: "http://localhost:9000/translate_a/single".to_string(),
            ..Default::default()
        }
        .with_timeout_ms(1500);
        config.to_file(&path).unwrap();

        let loaded = TranslatorConfig::from_file(&path).unwrap();
        assert_eq!(loaded.endpoint, "http://localhost:9000/translate_a/single");
        assert_eq!(loaded.timeout_ms, 1500);
        assert_eq!(loaded.tts_endpoint, DEFAULT_TTS_ENDPOINT);
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(TranslatorConfig::from_file(&path).is_err());
    }
}
