//! Main entry point for gtx-translate CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gtx_translate::cli::{self, commands::Commands};
use gtx_translate::TranslatorConfig;

/// gtx-translate - Google Translate web endpoint client
#[derive(Parser, Debug)]
#[command(name = "gtx-translate", version, about, long_about = None)]
struct Args {
    /// JSON configuration file (defaults to environment variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("gtx_translate={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match &args.config {
        Some(path) => TranslatorConfig::from_file(path)?,
        None => TranslatorConfig::load()?,
    };

    if let Some(timeout_ms) = args.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    config.validate()?;

    match args.command {
        Some(Commands::Translate { from, to, text }) => {
            cli::commands::handle_translate(config, from, to, text).await?;
        }
        Some(Commands::Languages) => {
            cli::commands::handle_languages()?;
        }
        Some(Commands::Server { host, port }) => {
            cli::commands::handle_server(config, host, port).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
