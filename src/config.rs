use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:5000".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Origins allowed to call the API from a browser. Credentials are
    /// always allowed, so wildcard origins are rejected at load time.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:8000".to_string(),
        "http://127.0.0.1:8000".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

#[derive(Debug, Deserialize, Clone)]
pub struct TranslationConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://translate.googleapis.com/translate_a/single".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate server
    if config.server.bind.is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    // Validate CORS: credentials are enabled, so the allow-list must name
    // concrete origins.
    for origin in &config.cors.allowed_origins {
        if origin == "*" {
            anyhow::bail!("cors.allowed_origins must not contain '*' (credentials are allowed)");
        }
        if !origin.starts_with("http://") && !origin.starts_with("https://") {
            anyhow::bail!("Invalid CORS origin: '{}'. Must be an http(s) URL.", origin);
        }
    }

    // Validate translation
    if config.translation.endpoint.is_empty() {
        anyhow::bail!("translation.endpoint must not be empty");
    }
    if config.translation.timeout_secs == 0 {
        anyhow::bail!("translation.timeout_secs must be > 0");
    }

    Ok(config)
}

/// Load the config file, or fall back to built-in defaults when it does not
/// exist. Parse and validation errors in an existing file still fail.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::default())
    }
}
