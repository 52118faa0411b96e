//! Hosted LLM summarization client.
//!
//! Speaks the OpenAI-compatible chat-completions protocol against a
//! configured base URL. One request per summary; transport and model
//! failures surface as [`ServiceError`] and are never retried here.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::models::{LengthParams, PromptVariant};
use crate::prompt::build_prompt;

/// Returned instead of calling the service when the input is blank.
pub const BLANK_INPUT_ADVISORY: &str = "Please enter valid text";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Remote summarization failure: transport error, non-success status, or a
/// response the client cannot interpret.
#[derive(Debug)]
pub struct ServiceError {
    pub reason: String,
}

impl ServiceError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for ServiceError {}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e.to_string())
    }
}

/// Anything that can turn text into a summary.
///
/// The length bounds are part of the contract so callers pass them per
/// density tier, but the hosted implementation does not feed them into the
/// prompt. Keeping them in the signature preserves the upstream behavior
/// instead of silently changing summary lengths.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        variant: PromptVariant,
        params: LengthParams,
    ) -> Result<String, ServiceError>;
}

/// Summarizer backed by an OpenAI-compatible chat-completions endpoint.
pub struct HostedSummarizer {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    temperature: f64,
    api_key: String,
}

impl HostedSummarizer {
    /// Build a client from config.
    ///
    /// # Errors
    ///
    /// Returns an error if `OPENAI_API_KEY` is missing or empty, or if the
    /// HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let api_key = match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => bail!("{} environment variable not set", API_KEY_ENV),
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint: chat_endpoint(&config.base_url),
            model: config.model.clone(),
            temperature: config.temperature,
            api_key,
        })
    }
}

#[async_trait]
impl Summarizer for HostedSummarizer {
    async fn summarize(
        &self,
        text: &str,
        variant: PromptVariant,
        _params: LengthParams,
    ) -> Result<String, ServiceError> {
        // Length bounds are accepted but the hosted prompt does not use them.
        if text.trim().is_empty() {
            return Ok(BLANK_INPUT_ADVISORY.to_string());
        }

        let prompt = build_prompt(variant, text);
        let body = request_body(&self.model, self.temperature, &prompt);

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "requesting summary"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(ServiceError::new(format!(
                "API error {}: {}",
                status, body_text
            )));
        }

        let json: serde_json::Value = response.json().await?;
        let raw = parse_completion(&json)?;
        Ok(strip_summary_label(&raw).to_string())
    }
}

/// Join a base URL with the chat-completions path.
///
/// A base that already names the full endpoint is used as-is, so configs
/// may point at either `https://host` or `https://host/chat/completions`.
fn chat_endpoint(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if base.ends_with("/chat/completions") {
        base.to_string()
    } else {
        format!("{}/chat/completions", base)
    }
}

/// Build the chat-completions request body.
fn request_body(model: &str, temperature: f64, prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "model": model,
        "messages": [
            { "role": "user", "content": prompt }
        ],
        "temperature": temperature,
    })
}

/// Pull the completion text out of a chat-completions response.
fn parse_completion(json: &serde_json::Value) -> Result<String, ServiceError> {
    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            ServiceError::new("malformed completion response: missing choices[0].message.content")
        })
}

/// Remove a literal leading `Summary:` label echoed back by the model.
fn strip_summary_label(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix("Summary:") {
        Some(rest) => rest.trim(),
        None => trimmed,
    }
}
