//! Tolerant model of the external page-audit response (PageSpeed Insights
//! shaped). Every field the projector reads is optional: a missing key is
//! absent data, never a deserialization error.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Top-level audit response. A payload-level `error` can arrive on a
/// successful HTTP transport and short-circuits projection entirely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResponse {
    pub error: Option<PayloadError>,
    pub lighthouse_result: Option<LighthouseReport>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayloadError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LighthouseReport {
    #[serde(default)]
    pub categories: HashMap<String, Category>,
    #[serde(default)]
    pub audits: HashMap<String, Audit>,
}

/// A category aggregate. A present category with no score is treated the
/// same as an absent category.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Audit {
    pub score: Option<f64>,
    pub details: Option<AuditDetails>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditDetails {
    #[serde(default)]
    pub items: Vec<Value>,
}

/// Core Web Vitals sample pulled from the first item of the `metrics`
/// audit's detail table. Fields the payload omits stay `None` and their
/// recommendations are simply not emitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsSample {
    pub largest_contentful_paint: Option<f64>,
    pub cumulative_layout_shift: Option<f64>,
    pub total_blocking_time: Option<f64>,
}

impl LighthouseReport {
    /// Score of a category, if both the category and its score are present.
    pub fn category_score(&self, id: &str) -> Option<f64> {
        self.categories.get(id).and_then(|c| c.score)
    }

    /// First metrics detail item, decoded tolerantly. `None` when the
    /// metrics audit, its details, or its items are missing or empty.
    pub fn vitals(&self) -> Option<VitalsSample> {
        let item = self
            .audits
            .get("metrics")?
            .details
            .as_ref()?
            .items
            .first()?;
        serde_json::from_value(item.clone()).ok()
    }
}
