//! Translation collaborator abstraction and implementations.
//!
//! Defines the [`Translator`] trait (the seam the response builder and the
//! tests program against) and the [`GoogleWebTranslator`], which calls the
//! public Google translate web endpoint with automatic source-language
//! detection.
//!
//! # Failure Modes
//!
//! Everything the collaborator can do wrong surfaces as a single error path:
//! unsupported target language, connection failure, non-success HTTP status,
//! and unparseable response body. The response builder converts all of them
//! into a warning reply; nothing here retries.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::time::Duration;

use crate::config::TranslationConfig;
use crate::language;

/// External service that translates assembled text into a target language.
///
/// The source language is always auto-detected. Implementations are shared
/// behind an `Arc` across request handlers.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_lang` (a free-form language name or
    /// ISO 639-1 code).
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String>;
}

/// Translator backed by the Google translate web endpoint.
///
/// Sends `GET {endpoint}?client=gtx&sl=auto&tl={code}&dt=t&q={text}` and
/// concatenates the translated segments from the JSON body. The endpoint
/// and request timeout come from `[translation]` in the config.
pub struct GoogleWebTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleWebTranslator {
    /// Create a translator from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build translation HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl Translator for GoogleWebTranslator {
    async fn translate(&self, text: &str, target_lang: &str) -> Result<String> {
        let code = language::resolve_code(target_lang)?;

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", code),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to reach translation endpoint: {}", self.endpoint))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("Translation service error {}: {}", status, body);
        }

        let json: serde_json::Value = response
            .json()
            .await
            .context("Translation service returned a non-JSON body")?;

        parse_translate_response(&json)
    }
}

/// Parse the gtx endpoint's JSON body.
///
/// The body is a nested array whose first element holds one
/// `[translated, source, ...]` entry per sentence segment. Segments are
/// concatenated in order to form the full translated text.
pub fn parse_translate_response(json: &serde_json::Value) -> Result<String> {
    let segments = json
        .get(0)
        .and_then(|s| s.as_array())
        .ok_or_else(|| anyhow::anyhow!("Invalid translation response: missing segment array"))?;

    let mut translated = String::new();
    for segment in segments {
        if let Some(text) = segment.get(0).and_then(|t| t.as_str()) {
            translated.push_str(text);
        }
    }

    if translated.is_empty() {
        bail!("Invalid translation response: no translated segments");
    }

    Ok(translated)
}
