//! HTTP API server implementation

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::core::client::AsyncTranslator;
use crate::core::config::TranslatorConfig;
use crate::core::errors::TranslationError;
use crate::core::languages;
use crate::core::models::TranslationRequest;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Shared translator
    translator: Arc<AsyncTranslator>,
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    /// Always "ok"
    status: String,
    /// Crate name
    service: String,
    /// Crate version
    version: String,
}

/// Languages list response
#[derive(Serialize)]
struct LanguagesResponse {
    /// Name/code pairs in table order
    languages: Vec<LanguageInfo>,
    /// Every accepted identifier, sorted
    identifiers: Vec<&'static str>,
}

/// One language table entry
#[derive(Serialize)]
struct LanguageInfo {
    /// Lower-case language name
    name: &'static str,
    /// Provider code
    code: &'static str,
}

/// Translation request body
#[derive(Deserialize)]
pub struct TranslateRequest {
    /// Text to translate
    pub text: String,
    /// Source language name or code
    pub source_lang: String,
    /// Target language name or code
    pub target_lang: String,
}

/// Translation response body
#[derive(Serialize)]
pub struct TranslateResponse {
    /// Translated text
    pub translation: String,
    /// Speech synthesis URL for the translation
    pub speech_url: String,
    /// Resolved source provider code
    pub source_code: String,
    /// Resolved target provider code
    pub target_code: String,
    /// Wall-clock time of the call
    pub elapsed_ms: u64,
}

/// Error response
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Error body
    pub error: ErrorDetail,
}

/// Error message and machine-readable code
#[derive(Serialize)]
pub struct ErrorDetail {
    /// Human-readable message
    pub message: String,
    /// Code from `TranslationError::code`
    pub code: String,
}

/// Handler error: status plus JSON body
type ApiError = (StatusCode, axum::Json<ErrorResponse>);

/// Wrap a translation error in the JSON error body
fn error_response(status: StatusCode, err: &TranslationError) -> ApiError {
    (
        status,
        axum::Json(ErrorResponse {
            error: ErrorDetail {
                message: err.to_string(),
                code: err.code().to_string(),
            },
        }),
    )
}

/// HTTP status for a translation error
fn status_for(err: &TranslationError) -> StatusCode {
    match err {
        TranslationError::UnsupportedLanguage { .. } | TranslationError::EmptyInput => {
            StatusCode::BAD_REQUEST
        }
        TranslationError::TimeoutError => StatusCode::GATEWAY_TIMEOUT,
        TranslationError::ConfigError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// Health check handler
async fn health_check() -> axum::Json<HealthResponse> {
    axum::Json(HealthResponse {
        status: "ok".to_string(),
        service: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Get languages handler
async fn get_languages() -> axum::Json<LanguagesResponse> {
    let languages = languages::language_pairs()
        .iter()
        .map(|&(name, code)| LanguageInfo { name, code })
        .collect();

    axum::Json(LanguagesResponse {
        languages,
        identifiers: languages::supported_languages(),
    })
}

/// Translation handler
async fn translate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateRequest>,
) -> Result<axum::Json<TranslateResponse>, ApiError> {
    let request = TranslationRequest::new(payload.text, payload.source_lang, payload.target_lang);

    let result = state.translator.translate(&request).await;
    let elapsed_ms = result.elapsed().as_millis() as u64;

    match result.into_result() {
        Ok(translation) => Ok(axum::Json(TranslateResponse {
            translation: translation.text,
            speech_url: translation.speech_url,
            source_code: translation.source_code,
            target_code: translation.target_code,
            elapsed_ms,
        })),
        Err(e) => {
            warn!("Translation request failed: {}", e);
            Err(error_response(status_for(&e), &e))
        }
    }
}

/// Build the API router around a translator
pub fn router(translator: AsyncTranslator) -> Router {
    let state = Arc::new(AppState {
        translator: Arc::new(translator),
    });

    Router::new()
        .route("/", get(health_check))
        .route("/languages", get(get_languages))
        .route("/translate", post(translate))
        .with_state(state)
}

/// Run the HTTP server
pub async fn run_server(config: TranslatorConfig, host: String, port: u16) -> anyhow::Result<()> {
    let translator = AsyncTranslator::new(config)?;
    let app = router(translator);

    // Bind address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::PageFetcher;
    use assert_json_diff::assert_json_include;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    #[derive(Debug)]
    struct FixedFetcher(Option<&'static str>);

    #[async_trait]
    impl PageFetcher for FixedFetcher {
        async fn fetch(&self, _url: &str) -> crate::core::errors::Result<String> {
            match self.0 {
                Some(body) => Ok(body.to_string()),
                None => Err(TranslationError::NetworkError {
                    message: "unreachable".to_string(),
                }),
            }
        }
    }

    fn app(body: Option<&'static str>) -> Router {
        router(AsyncTranslator::with_fetcher(
            TranslatorConfig::default(),
            Arc::new(FixedFetcher(body)),
        ))
    }

    async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_translate(payload: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/translate")
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, body) = call(app(None), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_json_include!(
            actual: body,
            expected: json!({"status": "ok", "service": crate::NAME, "version": crate::VERSION})
        );
    }

    #[tokio::test]
    async fn test_languages() {
        let request = Request::builder()
            .uri("/languages")
            .body(Body::empty())
            .unwrap();
        let (status, body) = call(app(None), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_json_include!(
            actual: body.clone(),
            expected: json!({"languages": [{"name": "afrikaans", "code": "af"}]})
        );
        assert_eq!(body["identifiers"].as_array().unwrap().len(), 126);
    }

    #[tokio::test]
    async fn test_translate_success() {
        let request = post_translate(json!({
            "text": "Hello",
            "source_lang": "english",
            "target_lang": "es"
        }));
        let (status, body) = call(app(Some(r#"[[["Hola","Hello"]],,"en"]"#)), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_json_include!(
            actual: body,
            expected: json!({
                "translation": "Hola",
                "source_code": "en",
                "target_code": "es",
                "speech_url": "https://translate.googleapis.com/translate_tts?ie=UTF-8&q=Hola&tl=es&total=1&idx=0&textlen=4&client=gtx"
            })
        );
    }

    #[tokio::test]
    async fn test_translate_unsupported_language() {
        let request = post_translate(json!({
            "text": "Hello",
            "source_lang": "english",
            "target_lang": "elvish"
        }));
        let (status, body) = call(app(Some("\"x\"")), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_json_include!(
            actual: body,
            expected: json!({"error": {"code": "unsupported_language"}})
        );
    }

    #[tokio::test]
    async fn test_translate_upstream_failure() {
        let request = post_translate(json!({
            "text": "Hello",
            "source_lang": "en",
            "target_lang": "es"
        }));
        let (status, body) = call(app(None), request).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_json_include!(
            actual: body,
            expected: json!({"error": {"code": "network_error"}})
        );
    }
}
