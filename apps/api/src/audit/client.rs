//! Audit client — the single point of entry for the external page-audit
//! call (PageSpeed Insights).
//!
//! The fetch is one attempt with no retry: a failure surfaces to the caller
//! as-is and becomes a `bad` recommendation in the report, never an HTTP
//! error from this service.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::audit::payload::AuditResponse;

const PAGESPEED_API_URL: &str = "https://www.googleapis.com/pagespeedonline/v5/runPagespeed";
/// Every invocation requests the same three categories.
const CATEGORIES: [&str; 3] = ["performance", "accessibility", "seo"];

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("audit API returned status {status}: {message}")]
    Api { status: u16, message: String },
}

/// Analysis strategy requested from the audit API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Mobile,
    Desktop,
}

impl Strategy {
    fn as_str(self) -> &'static str {
        match self {
            Strategy::Mobile => "mobile",
            Strategy::Desktop => "desktop",
        }
    }
}

/// Network collaborator seam. `AppState` carries an `Arc<dyn AuditFetcher>`
/// so tests can swap in a fake without touching the handler.
#[async_trait]
pub trait AuditFetcher: Send + Sync {
    async fn fetch(&self, url: &str, strategy: Strategy) -> Result<AuditResponse, AuditError>;
}

/// Production fetcher backed by the PageSpeed Insights API.
#[derive(Clone)]
pub struct PagespeedClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl PagespeedClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(PAGESPEED_API_URL.to_string(), api_key)
    }

    pub fn with_base_url(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl AuditFetcher for PagespeedClient {
    async fn fetch(&self, url: &str, strategy: Strategy) -> Result<AuditResponse, AuditError> {
        let mut query: Vec<(&str, &str)> = vec![("url", url), ("strategy", strategy.as_str())];
        for category in CATEGORIES {
            query.push(("category", category));
        }
        if let Some(key) = &self.api_key {
            query.push(("key", key.as_str()));
        }

        debug!(url, strategy = strategy.as_str(), "fetching page audit");

        let response = self.client.get(&self.base_url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AuditError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: AuditResponse = response.json().await?;
        Ok(payload)
    }
}
