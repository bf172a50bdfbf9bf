use crate::constants::{
    COMMERCIAL_BASE_SCORE, COMMERCIAL_DELIVERY_BONUS, COMMERCIAL_DELIVERY_MAX_DAYS,
    COMMERCIAL_WARRANTY_BONUS, COMMERCIAL_WARRANTY_MIN_MONTHS, FINANCIAL_ABOVE_TIERS_SCORE,
    FINANCIAL_BASE_SCORE, FINANCIAL_PRICE_TIERS, MAX_DIMENSION_SCORE, MISSING_PROPOSAL_SCORE,
    TECHNICAL_BASE_SCORE, TECHNICAL_CERTIFICATION_BONUS, TECHNICAL_CERTIFICATION_MIN_COUNT,
    TECHNICAL_EXPERIENCE_BONUS, TECHNICAL_EXPERIENCE_MIN_YEARS,
};
use tracing::debug;

use crate::document::{Document, Lookup};

use super::types::BidSubmission;

/// A pure per-dimension rule: `(proposal, criteria) -> score in [0, 1]`.
pub type DimensionScorer = fn(&Document, &Document) -> f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Technical,
    Commercial,
    Financial,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::Technical,
        Dimension::Commercial,
        Dimension::Financial,
    ];

    pub fn scorer(self) -> DimensionScorer {
        match self {
            Dimension::Technical => technical_score,
            Dimension::Commercial => commercial_score,
            Dimension::Financial => financial_score,
        }
    }

    /// This dimension's proposal in `bid`, if it was submitted.
    pub fn proposal(self, bid: &BidSubmission) -> Option<&Document> {
        match self {
            Dimension::Technical => bid.technical_proposal.as_ref(),
            Dimension::Commercial => bid.commercial_proposal.as_ref(),
            Dimension::Financial => bid.financial_proposal.as_ref(),
        }
    }

    /// Scores a possibly-missing proposal. A missing proposal scores `0.0`
    /// and the scorer is not invoked.
    pub fn score(self, proposal: Option<&Document>, criteria: &Document) -> f64 {
        match proposal {
            Some(proposal) => (self.scorer())(proposal, criteria),
            None => MISSING_PROPOSAL_SCORE,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Technical => "technical",
            Dimension::Commercial => "commercial",
            Dimension::Financial => "financial",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base 0.7; +0.2 for more than 5 years' `experience`; +0.1 for more than
/// 3 `certifications`.
pub fn technical_score(proposal: &Document, _criteria: &Document) -> f64 {
    let mut score = TECHNICAL_BASE_SCORE;

    if earns_bonus("experience", proposal.number("experience"), |years| {
        years > TECHNICAL_EXPERIENCE_MIN_YEARS
    }) {
        score += TECHNICAL_EXPERIENCE_BONUS;
    }

    if earns_bonus("certifications", proposal.list("certifications"), |certs| {
        certs.len() > TECHNICAL_CERTIFICATION_MIN_COUNT
    }) {
        score += TECHNICAL_CERTIFICATION_BONUS;
    }

    score.min(MAX_DIMENSION_SCORE)
}

/// Base 0.6; +0.3 for `deliveryTime` of 30 days or less; +0.1 for a
/// `warranty` of at least 12 months.
pub fn commercial_score(proposal: &Document, _criteria: &Document) -> f64 {
    let mut score = COMMERCIAL_BASE_SCORE;

    if earns_bonus("deliveryTime", proposal.number("deliveryTime"), |days| {
        days <= COMMERCIAL_DELIVERY_MAX_DAYS
    }) {
        score += COMMERCIAL_DELIVERY_BONUS;
    }

    if earns_bonus("warranty", proposal.number("warranty"), |months| {
        months >= COMMERCIAL_WARRANTY_MIN_MONTHS
    }) {
        score += COMMERCIAL_WARRANTY_BONUS;
    }

    score.min(MAX_DIMENSION_SCORE)
}

/// Step function of `totalPrice`; 0.5 when the price is missing or not a number.
pub fn financial_score(proposal: &Document, _criteria: &Document) -> f64 {
    let price = proposal.number("totalPrice");
    if price.is_wrong_type() {
        debug!(field = "totalPrice", "Proposal field has the wrong type; base score kept");
    }
    match price.present() {
        Some(price) => price_tier(price),
        None => FINANCIAL_BASE_SCORE,
    }
}

/// A mistyped field earns nothing, same as a missing one, but is worth a trace.
fn earns_bonus<T>(field: &str, lookup: Lookup<T>, rule: impl FnOnce(T) -> bool) -> bool {
    if lookup.is_wrong_type() {
        debug!(field, "Proposal field has the wrong type; bonus skipped");
    }
    lookup.is_present_and(rule)
}

fn price_tier(price: f64) -> f64 {
    FINANCIAL_PRICE_TIERS
        .iter()
        .find(|(ceiling, _)| price <= *ceiling)
        .map_or(FINANCIAL_ABOVE_TIERS_SCORE, |(_, score)| *score)
}
