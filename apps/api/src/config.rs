use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything here has a sensible default; an API key is only needed once
/// PageSpeed quota becomes a concern.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional PageSpeed Insights API key.
    pub pagespeed_api_key: Option<String>,
    /// Optional override of the audit API base URL (local stubs, proxies).
    pub pagespeed_api_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            pagespeed_api_key: std::env::var("PAGESPEED_API_KEY").ok(),
            pagespeed_api_url: std::env::var("PAGESPEED_API_URL").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
