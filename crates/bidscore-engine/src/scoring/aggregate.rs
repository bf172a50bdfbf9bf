use crate::constants::{
    CONDITIONAL_THRESHOLD, RECOMMENDED_THRESHOLD, RISK_LOW_THRESHOLD, RISK_MEDIUM_THRESHOLD,
    STRONGLY_RECOMMENDED_THRESHOLD,
};
use crate::document::Document;

use super::dimensions::Dimension;
use super::types::{BidSubmission, DimensionScores, Recommendation, RiskAssessment, ScoringCriteria};

impl DimensionScores {
    /// Scores every dimension of `bid`. Dimensions are independent, so the
    /// order of evaluation does not matter.
    pub fn evaluate(bid: &BidSubmission, criteria: &Document) -> Self {
        let score = |dimension: Dimension| dimension.score(dimension.proposal(bid), criteria);
        Self {
            technical: score(Dimension::Technical),
            commercial: score(Dimension::Commercial),
            financial: score(Dimension::Financial),
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Technical => self.technical,
            Dimension::Commercial => self.commercial,
            Dimension::Financial => self.financial,
        }
    }

    /// Raw weighted sum. No clamping, no renormalization.
    pub fn weighted_total(&self, criteria: &ScoringCriteria) -> f64 {
        self.technical * criteria.technical_weight
            + self.commercial * criteria.commercial_weight
            + self.financial * criteria.financial_weight
    }
}

impl RiskAssessment {
    /// `< 0.2` high, `[0.2, 0.6)` medium, `>= 0.6` low.
    pub fn from_total(total: f64) -> Self {
        if total < RISK_MEDIUM_THRESHOLD {
            RiskAssessment::HighRisk
        } else if total < RISK_LOW_THRESHOLD {
            RiskAssessment::MediumRisk
        } else {
            RiskAssessment::LowRisk
        }
    }
}

impl Recommendation {
    /// `>= 0.8` strongly, `[0.6, 0.8)` recommended, `[0.4, 0.6)` conditional, else not.
    pub fn from_total(total: f64) -> Self {
        if total >= STRONGLY_RECOMMENDED_THRESHOLD {
            Recommendation::StronglyRecommended
        } else if total >= RECOMMENDED_THRESHOLD {
            Recommendation::Recommended
        } else if total >= CONDITIONAL_THRESHOLD {
            Recommendation::Conditional
        } else {
            Recommendation::NotRecommended
        }
    }
}
