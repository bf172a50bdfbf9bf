//! Bid scoring library crate (used by the server and integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`BidSubmission`], [`ScoringCriteria`], [`ScoreResult`] - Scoring inputs and output
//! - [`Recommendation`], [`RiskAssessment`] - Tier labels derived from the total score
//!
//! ## Access Control
//! - [`Authenticator`], [`JwtConfig`] - HMAC-only bearer credential verification
//! - [`CallerIdentity`] - Claims decoded from a verified credential
//! - [`authorize`], [`require_role`] - Exact-match role gates
//!
//! ## Scoring
//! - [`score_bid`] - The role-gated scoring pipeline
//! - [`Dimension`], [`DimensionScores`] - Per-dimension scorers and their results
//! - [`Document`], [`Lookup`] - Typed access to open-ended proposal documents
//!
//! ## Test/Mock Support
//! Token minting helpers are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod auth;
pub mod config;
pub mod constants;
pub mod document;
pub mod scoring;

#[cfg(any(test, feature = "mock"))]
pub use auth::TokenFactory;
pub use auth::{
    AuthError, Authenticator, CallerIdentity, JwtConfig, authorize, bearer_token, require_role,
};
pub use config::{Config, ConfigError};
pub use constants::{ROLE_ADMIN, ROLE_USER};
pub use document::{Document, Lookup};
pub use scoring::{
    BidSubmission, Dimension, DimensionScores, ENGINE_SCORING_ROLES, Recommendation,
    RiskAssessment, ScoreResult, ScoringCriteria, ScoringError, score_bid,
};
