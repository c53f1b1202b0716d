//! gtx-translate - client for the Google Translate web endpoint
//!
//! This library resolves language names to provider codes, fetches and scrapes
//! translations from the `gtx` endpoint, and derives speech synthesis URLs.
//! A CLI and a small HTTP API are built on top of it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod core;
pub mod server;
pub mod cli;

// Re-export key types for convenience
pub use core::{
    client::{AsyncTranslator, HttpFetcher, PageFetcher},
    config::TranslatorConfig,
    models::{Translation, TranslationRequest, TranslationResult},
    errors::TranslationError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
