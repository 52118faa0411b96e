use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::cache;
use crate::models::PromptVariant;

/// Top-level configuration. Every section has working defaults, so a
/// missing config file simply means "run with defaults".
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.ai.it.ufl.edu".to_string()
}
fn default_model() -> String {
    "llama-3.3-70b-instruct".to_string()
}
fn default_temperature() -> f64 {
    0.1
}
fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

fn default_ttl_secs() -> i64 {
    cache::DEFAULT_TTL_SECS
}

#[derive(Debug, Deserialize, Clone)]
pub struct PromptConfig {
    #[serde(default = "default_variant")]
    pub variant: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            variant: default_variant(),
        }
    }
}

fn default_variant() -> String {
    "sectioned".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LimitsConfig {
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_max_upload_bytes() -> u64 {
    10 * 1024 * 1024
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!("no config file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate api
    if config.api.base_url.trim().is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    if config.api.model.trim().is_empty() {
        anyhow::bail!("api.model must not be empty");
    }
    if !(0.0..=2.0).contains(&config.api.temperature) {
        anyhow::bail!("api.temperature must be in [0.0, 2.0]");
    }
    if config.api.timeout_secs == 0 {
        anyhow::bail!("api.timeout_secs must be > 0");
    }

    // Validate cache
    if config.cache.ttl_secs < 1 {
        anyhow::bail!("cache.ttl_secs must be >= 1");
    }

    // Validate prompt
    config
        .prompt
        .variant
        .parse::<PromptVariant>()
        .with_context(|| "Invalid prompt.variant")?;

    // Validate limits
    if config.limits.max_upload_bytes == 0 {
        anyhow::bail!("limits.max_upload_bytes must be > 0");
    }

    Ok(config)
}
