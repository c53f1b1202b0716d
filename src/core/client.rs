//! Async client for the gtx translation endpoint

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::languages;
use crate::core::models::{Translation, TranslationRequest, TranslationResult};
use crate::core::parser;

/// Source of raw response bodies for a request URL
#[async_trait]
pub trait PageFetcher: Send + Sync + fmt::Debug {
    /// GET the URL and return the body as text
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// reqwest-backed fetcher sending the configured user agent
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    /// Pooled client with the request timeout applied
    client: reqwest::Client,
    /// Sent as the `user-agent` header on every request
    user_agent: String,
}

impl HttpFetcher {
    /// Build a fetcher from configuration
    pub fn new(config: &TranslatorConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(TranslationError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranslationError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response.text().await.map_err(TranslationError::from_transport)
    }
}

/// Async translator; cheap to clone and share between tasks
#[derive(Debug, Clone)]
pub struct AsyncTranslator {
    /// Where response bodies come from
    fetcher: Arc<dyn PageFetcher>,
    /// Endpoints and timeout
    config: Arc<TranslatorConfig>,
}

impl AsyncTranslator {
    /// Create a new async translator backed by HTTP
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| TranslationError::ConfigError {
                message: e.to_string(),
            })?;
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Create a translator with a custom fetcher
    pub fn with_fetcher(config: TranslatorConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            fetcher,
            config: Arc::new(config),
        }
    }

    /// Translate `text` between two language names or codes
    pub async fn translate_text(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> TranslationResult {
        self.translate(&TranslationRequest::new(text, source_lang, target_lang))
            .await
    }

    /// Translate a single request
    pub async fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        self.translate_with_cancel(request, CancellationToken::new())
            .await
    }

    /// Translate a single request, aborting when `cancel` fires
    pub async fn translate_with_cancel(
        &self,
        request: &TranslationRequest,
        cancel: CancellationToken,
    ) -> TranslationResult {
        let start = Instant::now();
        let timeout = Duration::from_millis(self.config.timeout_ms);

        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TranslationError::Cancelled),
            result = tokio::time::timeout(timeout, self.run(request)) => {
                result.unwrap_or(Err(TranslationError::TimeoutError))
            }
        };

        let elapsed = start.elapsed();
        match &outcome {
            Ok(translation) => info!(
                "Translated {} chars {} -> {} in {:?}",
                request.text.chars().count(),
                translation.source_code,
                translation.target_code,
                elapsed
            ),
            Err(e) => warn!(
                "Translation {} -> {} failed after {:?}: {}",
                request.source_lang, request.target_lang, elapsed, e
            ),
        }

        TranslationResult { outcome, elapsed }
    }

    /// Resolve, fetch, parse; no timing or cancellation here
    async fn run(&self, request: &TranslationRequest) -> Result<Translation> {
        if request.text.trim().is_empty() {
            return Err(TranslationError::EmptyInput);
        }

        let source_code = resolve_language(&request.source_lang)?;
        let target_code = resolve_language(&request.target_lang)?;

        let url = parser::build_request_url(
            &self.config.endpoint,
            source_code,
            target_code,
            &request.text,
        );
        debug!("Fetching {}", url);

        let body = self.fetcher.fetch(&url).await?;
        debug!("Received {} bytes", body.len());

        let text = parser::parse_translation(&body, source_code)?;
        let speech_url = parser::build_speech_url(&self.config.tts_endpoint, &text, target_code);

        Ok(Translation {
            text,
            speech_url,
            source_code: source_code.to_string(),
            target_code: target_code.to_string(),
        })
    }
}

/// Provider code for an identifier, or `UnsupportedLanguage`
fn resolve_language(identifier: &str) -> Result<&'static str> {
    languages::resolve(identifier).ok_or_else(|| TranslationError::UnsupportedLanguage {
        language: identifier.to_string(),
    })
}
