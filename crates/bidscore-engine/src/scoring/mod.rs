//! Weighted, role-gated bid scoring.
//!
//! [`score_bid`] runs its own role gate, then scores the three dimensions
//! independently, combines them with the caller's weights, and derives the
//! recommendation and risk tiers from fixed thresholds.
//!
//! # Weights Are Not Normalized
//!
//! The total is the raw weighted sum. Weights that do not sum to 1 (or are
//! negative) push the total outside `[0, 1]`; tiers are still derived from it
//! as-is.
//!
//! # Missing vs. Unparseable Proposals
//!
//! A proposal that was not submitted scores `0.0`. A submitted proposal with
//! missing or mistyped fields earns its base score and skips the bonuses.

pub mod aggregate;
pub mod dimensions;
pub mod engine;
pub mod error;
pub mod types;


pub use dimensions::{Dimension, DimensionScorer, commercial_score, financial_score, technical_score};
pub use engine::{ENGINE_SCORING_ROLES, score_bid};
pub use error::ScoringError;
pub use types::{
    BidSubmission, DimensionScores, Recommendation, RiskAssessment, ScoreResult, ScoringCriteria,
};
