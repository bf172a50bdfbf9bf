use serde::{Deserialize, Serialize};

use crate::document::Document;

/// A vendor's bid on a tender.
///
/// Any proposal may be absent (missing or `null` in JSON), meaning it was not submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidSubmission {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tender_id: String,
    #[serde(default)]
    pub vendor_id: String,
    #[serde(default)]
    pub technical_proposal: Option<Document>,
    #[serde(default)]
    pub commercial_proposal: Option<Document>,
    #[serde(default)]
    pub financial_proposal: Option<Document>,
}

impl BidSubmission {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_technical(mut self, proposal: Document) -> Self {
        self.technical_proposal = Some(proposal);
        self
    }

    pub fn with_commercial(mut self, proposal: Document) -> Self {
        self.commercial_proposal = Some(proposal);
        self
    }

    pub fn with_financial(mut self, proposal: Document) -> Self {
        self.financial_proposal = Some(proposal);
        self
    }
}

/// Caller-supplied weights plus a free-form rule document.
///
/// Weights are used as given: not validated, not normalized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringCriteria {
    #[serde(default)]
    pub technical_weight: f64,
    #[serde(default)]
    pub commercial_weight: f64,
    #[serde(default)]
    pub financial_weight: f64,
    /// Reserved for future rule parameters; handed to every scorer untouched.
    #[serde(default)]
    pub criteria: Document,
}

impl ScoringCriteria {
    pub fn weighted(technical: f64, commercial: f64, financial: f64) -> Self {
        Self {
            technical_weight: technical,
            commercial_weight: commercial,
            financial_weight: financial,
            criteria: Document::default(),
        }
    }
}

/// Per-dimension scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimensionScores {
    pub technical: f64,
    pub commercial: f64,
    pub financial: f64,
}

/// Recommendation tier, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    NotRecommended,
    Conditional,
    Recommended,
    StronglyRecommended,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::NotRecommended => "NOT_RECOMMENDED",
            Recommendation::Conditional => "CONDITIONAL",
            Recommendation::Recommended => "RECOMMENDED",
            Recommendation::StronglyRecommended => "STRONGLY_RECOMMENDED",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk tier, ordered from riskiest to safest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskAssessment {
    HighRisk,
    MediumRisk,
    LowRisk,
}

impl RiskAssessment {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskAssessment::HighRisk => "HIGH_RISK",
            RiskAssessment::MediumRisk => "MEDIUM_RISK",
            RiskAssessment::LowRisk => "LOW_RISK",
        }
    }
}

impl std::fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one scoring invocation. Not persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub bid_id: String,
    pub technical_score: f64,
    pub commercial_score: f64,
    pub financial_score: f64,
    /// Raw weighted sum; unbounded.
    pub total_score: f64,
    pub recommendation: Recommendation,
    pub risk_assessment: RiskAssessment,
}

impl ScoreResult {
    pub fn dimension_scores(&self) -> DimensionScores {
        DimensionScores {
            technical: self.technical_score,
            commercial: self.commercial_score,
            financial: self.financial_score,
        }
    }
}
