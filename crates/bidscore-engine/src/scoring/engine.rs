use tracing::info;

use crate::auth::authorize;
use crate::constants::{ROLE_ADMIN, ROLE_USER};

use super::error::ScoringError;
use super::types::{BidSubmission, DimensionScores, Recommendation, RiskAssessment, ScoreResult, ScoringCriteria};

/// Roles the engine itself admits, independent of any transport-level gate.
pub const ENGINE_SCORING_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

/// Scores `bid` against `criteria` on behalf of a caller holding `caller_role`.
///
/// The role is checked here even if the transport already checked it, so callers
/// that bypass HTTP (jobs, tests, other services) are still gated. Apart from the
/// audit record this is a pure function of its inputs.
pub fn score_bid(
    bid: &BidSubmission,
    criteria: &ScoringCriteria,
    caller_role: &str,
) -> Result<ScoreResult, ScoringError> {
    authorize(caller_role, ENGINE_SCORING_ROLES).map_err(ScoringError::Forbidden)?;

    let scores = DimensionScores::evaluate(bid, &criteria.criteria);
    let total_score = scores.weighted_total(criteria);
    let risk_assessment = RiskAssessment::from_total(total_score);
    let recommendation = Recommendation::from_total(total_score);

    info!(
        bid_id = %bid.id,
        caller_role = %caller_role,
        total_score,
        risk = %risk_assessment,
        recommendation = %recommendation,
        "Bid scored"
    );

    Ok(ScoreResult {
        bid_id: bid.id.clone(),
        technical_score: scores.technical,
        commercial_score: scores.commercial,
        financial_score: scores.financial,
        total_score,
        recommendation,
        risk_assessment,
    })
}
