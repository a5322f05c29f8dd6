use serde::{Deserialize, Serialize};

/// Classification of a single recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Good,
    Bad,
    Info,
}

/// One classified piece of advice emitted by a check.
/// Emission order matches check execution order and is never reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub message: String,
    pub severity: Severity,
}

impl Recommendation {
    pub fn good(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Good,
        }
    }

    pub fn bad(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Bad,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }
}

/// Headline 0–100 score display for one audit category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub title: String,
    pub score: f64,
}

/// The URL pipeline emits score cards and recommendations into the same
/// ordered sink; the UI renders the two kinds distinctly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportItem {
    Recommendation(Recommendation),
    ScoreCard(ScoreCard),
}

impl From<Recommendation> for ReportItem {
    fn from(rec: Recommendation) -> Self {
        ReportItem::Recommendation(rec)
    }
}

impl From<ScoreCard> for ReportItem {
    fn from(card: ScoreCard) -> Self {
        ReportItem::ScoreCard(card)
    }
}
