//! CLI command definitions and handlers

use clap::Subcommand;
use tracing::info;

use crate::core::client::AsyncTranslator;
use crate::core::config::TranslatorConfig;
use crate::core::languages;
use crate::core::models::TranslationRequest;

/// Commands for gtx-translate
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text
    Translate {
        /// Source language name or code (e.g. english, en)
        #[arg(short, long)]
        from: String,

        /// Target language name or code (e.g. spanish, es)
        #[arg(short, long)]
        to: String,

        /// Text to translate
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List supported language names and codes
    Languages,

    /// Start HTTP API server
    Server {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 8000)
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

/// Handle translate command
pub async fn handle_translate(
    config: TranslatorConfig,
    from: String,
    to: String,
    text: Vec<String>,
) -> anyhow::Result<()> {
    let translator = AsyncTranslator::new(config)?;
    let request = TranslationRequest::new(text.join(" "), from, to);

    info!(
        "Translating from {} to {}",
        request.source_lang, request.target_lang
    );

    let result = translator.translate(&request).await;
    let elapsed = result.elapsed();
    let translation = result.into_result()?;

    println!("{}", translation.text);
    println!("\n🔊 Speech: {}", translation.speech_url);
    println!("   Time: {:?}", elapsed);

    Ok(())
}

/// Handle languages command
pub fn handle_languages() -> anyhow::Result<()> {
    let names: Vec<String> = languages::language_pairs()
        .iter()
        .map(|(name, code)| format!("{} ({})", name, code))
        .collect();

    println!("Supported languages ({}):", names.len());
    println!("{}", names.join(", "));

    Ok(())
}

/// Handle server command
pub async fn handle_server(config: TranslatorConfig, host: String, port: u16) -> anyhow::Result<()> {
    use crate::server::api::run_server;

    info!("Starting HTTP server on {}:{}", host, port);
    println!("🚀 Server starting on http://{}:{}", host, port);

    run_server(config, host, port).await?;

    Ok(())
}
