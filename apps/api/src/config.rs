use anyhow::{Context, Result};
use secrecy::Secret;

const DEFAULT_AZURE_ENDPOINT: &str = "https://mleu-gpt.openai.azure.com/";
const DEFAULT_AZURE_API_VERSION: &str = "2024-05-01-preview";
const DEFAULT_AZURE_DEPLOYMENT: &str = "gpt-4o";

/// Application configuration loaded from environment variables.
/// Fails at startup if the API key is missing or a numeric value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub azure_endpoint: String,
    pub azure_api_version: String,
    pub azure_deployment: String,
    pub azure_api_key: Secret<String>,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_mb = std::env::var("MAX_UPLOAD_MB")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<usize>()
            .context("MAX_UPLOAD_MB must be a whole number of megabytes")?;

        Ok(Config {
            azure_endpoint: env_or("AZURE_OPENAI_ENDPOINT", DEFAULT_AZURE_ENDPOINT),
            azure_api_version: env_or("AZURE_OPENAI_API_VERSION", DEFAULT_AZURE_API_VERSION),
            azure_deployment: env_or("AZURE_OPENAI_DEPLOYMENT", DEFAULT_AZURE_DEPLOYMENT),
            azure_api_key: Secret::new(require_env("AZURE_OPENAI_API_KEY")?),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: megabytes_to_bytes(max_upload_mb)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

#[cfg(test)]
impl Config {
    /// Defaults with a dummy key, for unit and router tests.
    pub fn for_tests() -> Self {
        Config {
            azure_endpoint: DEFAULT_AZURE_ENDPOINT.to_string(),
            azure_api_version: DEFAULT_AZURE_API_VERSION.to_string(),
            azure_deployment: DEFAULT_AZURE_DEPLOYMENT.to_string(),
            azure_api_key: Secret::new("test-key".to_string()),
            port: 8080,
            max_upload_bytes: 10 * 1024 * 1024,
            rust_log: "info".to_string(),
        }
    }
}

fn megabytes_to_bytes(mb: usize) -> Result<usize> {
    mb.checked_mul(1024 * 1024)
        .with_context(|| format!("MAX_UPLOAD_MB={mb} is too large"))
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
