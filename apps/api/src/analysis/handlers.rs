use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::analysis::checks::{analyze, AnalysisInput};
use crate::analysis::document::PageDocument;
use crate::report::Recommendation;

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub recommendations: Vec<Recommendation>,
}

/// POST /api/v1/analyze
/// Parses the body markup and runs the content checks. Never fails: empty
/// or malformed fields degrade to recommendations, not errors.
pub async fn handle_analyze(Json(input): Json<AnalysisInput>) -> Json<AnalyzeResponse> {
    let doc = PageDocument::parse(&input.body_markup);
    let recommendations = analyze(&input, &doc);
    debug!(count = recommendations.len(), "content analysis complete");
    Json(AnalyzeResponse { recommendations })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_handle_analyze_returns_ordered_recommendations() {
        let input = AnalysisInput {
            title: "A reasonably descriptive title for a page".to_string(),
            focus_keyword: String::new(),
            meta_description: String::new(),
            body_markup: "<p>hello world</p>".to_string(),
        };
        let Json(resp) = handle_analyze(Json(input)).await;
        assert!(!resp.recommendations.is_empty());
        // Title length message is always first.
        assert!(resp.recommendations[0].message.contains("Title"));
    }
}
