//! Scraping of the gtx pseudo-JSON response and URL construction
//!
//! The endpoint answers with nested arrays that are not reliably valid JSON
//! (elided `null`s show up as `,,`), so the body is handled as plain text.
//! Phrase data ends where the source language code is echoed back as
//! `,,"<code>"`.

use tracing::debug;

use crate::core::errors::{Result, TranslationError};

/// Space-before-punctuation artifacts left by the phrase join
const PUNCTUATION_FIXES: &[(&str, &str)] = &[
    (" ?", "?"),
    (" !", "!"),
    (" ,", ","),
    (" .", "."),
    (" ;", ";"),
];

/// Build the `translate_a/single` request URL
pub fn build_request_url(endpoint: &str, source_code: &str, target_code: &str, text: &str) -> String {
    format!(
        "{}?client=gtx&sl={}&tl={}&dt=t&q={}",
        endpoint,
        source_code,
        target_code,
        urlencoding::encode(text)
    )
}

/// Build the `translate_tts` URL for an already cleaned translation
pub fn build_speech_url(tts_endpoint: &str, translation: &str, target_code: &str) -> String {
    format!(
        "{}?ie=UTF-8&q={}&tl={}&total=1&idx=0&textlen={}&client=gtx",
        tts_endpoint,
        urlencoding::encode(translation),
        target_code,
        translation.encode_utf16().count()
    )
}

/// Extract the translated text from a response body
pub fn parse_translation(body: &str, source_code: &str) -> Result<String> {
    let marker = format!(",,\"{}\"", source_code);

    let raw = match body.find(&marker) {
        Some(index) => join_phrases(&body[..index]),
        None => {
            debug!("Marker {} not found, treating body as single word", marker);
            first_quoted(body)
                .ok_or_else(|| TranslationError::ParseError {
                    message: "no quoted text in response".to_string(),
                })?
                .to_string()
        }
    };

    let translation = fix_punctuation(&raw);
    if translation.is_empty() {
        return Err(TranslationError::ParseError {
            message: "response contained no translated phrases".to_string(),
        });
    }

    Ok(translation)
}

/// Trim and remove spaces the join leaves in front of punctuation
pub fn fix_punctuation(text: &str) -> String {
    PUNCTUATION_FIXES
        .iter()
        .fold(text.trim().to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// First `"..."` substring, without the quotes
fn first_quoted(body: &str) -> Option<&str> {
    let start = body.find('"')? + 1;
    let len = body[start..].find('"')?;
    Some(&body[start..start + len])
}

/// Flatten the phrase arrays and keep every translated (even) fragment
fn join_phrases(segment: &str) -> String {
    let flat = segment
        .replace("],[", ",")
        .replace(']', "")
        .replace('[', "")
        .replace("\",\"", "\"");

    let fragments: Vec<&str> = flat.split('"').filter(|f| !f.is_empty()).collect();

    let mut phrases = Vec::new();
    let mut i = 0;
    while i < fragments.len() {
        let fragment = fragments[i];
        if fragment.starts_with(",,") {
            // metadata shifts the original/translated pairing by one
            i += 1;
            continue;
        }
        phrases.push(fragment);
        i += 2;
    }

    phrases.join("  ")
}
