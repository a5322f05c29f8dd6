use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::audit::client::Strategy;
use crate::audit::projector::project;
use crate::errors::AppError;
use crate::report::{Recommendation, ReportItem};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AuditRequest {
    pub url: String,
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Serialize)]
pub struct AuditReportResponse {
    pub items: Vec<ReportItem>,
}

/// POST /api/v1/audit
/// Fetches the external page audit and projects it into report items.
/// A transport failure is not an HTTP error: it surfaces as one `bad`
/// recommendation carrying the failure message, exactly once, no retry.
pub async fn handle_audit(
    State(state): State<AppState>,
    Json(req): Json<AuditRequest>,
) -> Result<Json<AuditReportResponse>, AppError> {
    if req.url.trim().is_empty() {
        return Err(AppError::Validation("url must not be empty".to_string()));
    }

    let items = match state.auditor.fetch(&req.url, req.strategy).await {
        Ok(payload) => project(&payload),
        Err(e) => {
            warn!(url = %req.url, error = %e, "page audit fetch failed");
            vec![ReportItem::Recommendation(Recommendation::bad(format!(
                "Audit request failed: {e}"
            )))]
        }
    };

    Ok(Json(AuditReportResponse { items }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::client::{AuditError, AuditFetcher};
    use crate::audit::payload::AuditResponse;
    use crate::config::Config;
    use crate::report::Severity;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Arc;

    struct FakeFetcher {
        result: Result<serde_json::Value, String>,
    }

    #[async_trait]
    impl AuditFetcher for FakeFetcher {
        async fn fetch(&self, _url: &str, _strategy: Strategy) -> Result<AuditResponse, AuditError> {
            match &self.result {
                Ok(value) => Ok(serde_json::from_value(value.clone()).unwrap()),
                Err(message) => Err(AuditError::Api {
                    status: 500,
                    message: message.clone(),
                }),
            }
        }
    }

    fn state_with(fetcher: FakeFetcher) -> AppState {
        AppState {
            config: Config {
                pagespeed_api_key: None,
                pagespeed_api_url: None,
                port: 8080,
                rust_log: "info".to_string(),
            },
            auditor: Arc::new(fetcher),
        }
    }

    #[tokio::test]
    async fn test_audit_projects_successful_payload() {
        let state = state_with(FakeFetcher {
            result: Ok(json!({
                "lighthouseResult": {
                    "categories": { "seo": { "score": 0.95 } }
                }
            })),
        });
        let req = AuditRequest {
            url: "https://example.com".to_string(),
            strategy: Strategy::Mobile,
        };
        let Json(resp) = handle_audit(State(state), Json(req)).await.unwrap();
        assert!(resp
            .items
            .iter()
            .any(|i| matches!(i, ReportItem::ScoreCard(c) if c.title == "SEO")));
    }

    #[tokio::test]
    async fn test_fetch_failure_becomes_single_bad_recommendation() {
        let state = state_with(FakeFetcher {
            result: Err("connection refused".to_string()),
        });
        let req = AuditRequest {
            url: "https://example.com".to_string(),
            strategy: Strategy::Mobile,
        };
        let Json(resp) = handle_audit(State(state), Json(req)).await.unwrap();
        assert_eq!(resp.items.len(), 1);
        match &resp.items[0] {
            ReportItem::Recommendation(r) => {
                assert_eq!(r.severity, Severity::Bad);
                assert!(r.message.contains("connection refused"));
            }
            other => panic!("expected a recommendation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_url_is_validation_error() {
        let state = state_with(FakeFetcher {
            result: Ok(json!({})),
        });
        let req = AuditRequest {
            url: "   ".to_string(),
            strategy: Strategy::Mobile,
        };
        let result = handle_audit(State(state), Json(req)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
