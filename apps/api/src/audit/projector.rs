//! Audit projector — maps an external audit payload into the ordered
//! recommendation/score-card shape shared with the content analyzer.
//!
//! Missing data is never an error here. Performance and SEO get an explicit
//! "missing" recommendation when their category is absent; Accessibility is
//! silently omitted instead. Individual audits that are absent produce no
//! message at all. That asymmetry is intentional and load-bearing for the
//! UI, so the branches below keep it explicit.

use serde::Serialize;

use crate::audit::payload::{AuditResponse, LighthouseReport};
use crate::report::{Recommendation, ReportItem, ScoreCard};

// Core Web Vitals thresholds, in the units the payload reports.
const LCP_GOOD_MS: f64 = 2500.0;
const LCP_NEEDS_WORK_MS: f64 = 4000.0;
const CLS_GOOD: f64 = 0.1;
const CLS_NEEDS_WORK: f64 = 0.25;
const TBT_GOOD_MS: f64 = 200.0;

const ACCESSIBILITY_GOOD: f64 = 90.0;

/// Projects the audit payload into the ordered sink consumed by the UI.
/// Pure with respect to the payload; emission order is fixed.
pub fn project(resp: &AuditResponse) -> Vec<ReportItem> {
    let mut items = Vec::new();

    // A payload-level error on a successful transport kills the whole
    // projection, not just one category.
    if let Some(err) = &resp.error {
        items.push(Recommendation::bad(format!("Audit failed: {}", err.message)).into());
        return items;
    }

    let fallback = LighthouseReport::default();
    let report = resp.lighthouse_result.as_ref().unwrap_or(&fallback);

    project_performance(&mut items, report);
    project_accessibility(&mut items, report);
    project_seo(&mut items, report);
    items
}

fn project_performance(items: &mut Vec<ReportItem>, report: &LighthouseReport) {
    let Some(score) = report.category_score("performance") else {
        items.push(
            Recommendation::bad("Performance data is missing from the audit response.").into(),
        );
        return;
    };

    items.push(
        ScoreCard {
            title: "Performance".to_string(),
            score: score * 100.0,
        }
        .into(),
    );
    items.push(Recommendation::good("Core Web Vitals:").into());

    let Some(vitals) = report.vitals() else {
        // Score card and header still stand; only the metric lines drop out.
        return;
    };

    if let Some(lcp) = vitals.largest_contentful_paint {
        let message = format!("Largest Contentful Paint is {:.2}s.", lcp / 1000.0);
        items.push(if lcp <= LCP_GOOD_MS {
            Recommendation::good(message).into()
        } else if lcp <= LCP_NEEDS_WORK_MS {
            Recommendation::info(message).into()
        } else {
            Recommendation::bad(message).into()
        });
    }

    if let Some(cls) = vitals.cumulative_layout_shift {
        let message = format!("Cumulative Layout Shift is {cls:.3}.");
        items.push(if cls <= CLS_GOOD {
            Recommendation::good(message).into()
        } else if cls <= CLS_NEEDS_WORK {
            Recommendation::info(message).into()
        } else {
            Recommendation::bad(message).into()
        });
    }

    if let Some(tbt) = vitals.total_blocking_time {
        let message = format!("Total Blocking Time is {}ms.", tbt.round() as i64);
        items.push(if tbt <= TBT_GOOD_MS {
            Recommendation::good(message).into()
        } else {
            Recommendation::bad(message).into()
        });
    }
}

fn project_accessibility(items: &mut Vec<ReportItem>, report: &LighthouseReport) {
    // Absent accessibility data emits nothing, unlike the other categories.
    let Some(score) = report.category_score("accessibility") else {
        return;
    };

    let score = score * 100.0;
    items.push(
        ScoreCard {
            title: "Accessibility".to_string(),
            score,
        }
        .into(),
    );
    items.push(if score < ACCESSIBILITY_GOOD {
        Recommendation::bad(
            "Accessibility score is below 90. Review contrast, labels, and ARIA attributes.",
        )
        .into()
    } else {
        Recommendation::good("Accessibility looks good.").into()
    });
}

fn project_seo(items: &mut Vec<ReportItem>, report: &LighthouseReport) {
    let Some(score) = report.category_score("seo") else {
        items.push(Recommendation::bad("SEO audit is missing from the response.").into());
        return;
    };

    items.push(
        ScoreCard {
            title: "SEO".to_string(),
            score: score * 100.0,
        }
        .into(),
    );

    // Each named audit is evaluated only when present in the payload.
    if let Some(audit) = report.audits.get("meta-description") {
        items.push(if audit.score == Some(0.0) {
            Recommendation::bad("Page is missing a meta description.").into()
        } else {
            Recommendation::good("Meta description is present.").into()
        });
    }

    if let Some(audit) = report.audits.get("image-alt") {
        items.push(if audit.score.map(|s| s < 1.0).unwrap_or(false) {
            Recommendation::bad("Some images are missing alt attributes.").into()
        } else {
            Recommendation::good("Images have alt attributes.").into()
        });
    }

    if let Some(audit) = report.audits.get("is-crawlable") {
        items.push(if audit.score.map(|s| s < 1.0).unwrap_or(false) {
            Recommendation::bad("Page is blocked from indexing.").into()
        } else {
            Recommendation::good("Page is crawlable and indexable.").into()
        });
    }

    if let Some(audit) = report.audits.get("viewport") {
        items.push(if audit.score == Some(0.0) {
            Recommendation::bad("No viewport meta tag. The page is not mobile friendly.").into()
        } else {
            Recommendation::good("Viewport meta tag is present.").into()
        });
    }
}

/// Display band for a 0-100 category score; the rendering collaborator
/// colors score cards with this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Low,
    Mid,
    High,
}

pub fn score_band(score: f64) -> ScoreBand {
    if score < 50.0 {
        ScoreBand::Low
    } else if score < 90.0 {
        ScoreBand::Mid
    } else {
        ScoreBand::High
    }
}
