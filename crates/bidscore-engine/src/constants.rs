//! Fixed scoring rules and role names.
//!
//! Thresholds are compile-time constants; the criteria document carried by
//! [`ScoringCriteria`](crate::ScoringCriteria) is reserved for future rule parameters
//! and does not override anything here.

pub const ROLE_USER: &str = "USER";
pub const ROLE_ADMIN: &str = "ADMIN";

pub const TECHNICAL_BASE_SCORE: f64 = 0.7;
pub const TECHNICAL_EXPERIENCE_BONUS: f64 = 0.2;
/// `experience` must be strictly greater than this to earn the bonus.
pub const TECHNICAL_EXPERIENCE_MIN_YEARS: f64 = 5.0;
pub const TECHNICAL_CERTIFICATION_BONUS: f64 = 0.1;
/// `certifications` must hold strictly more entries than this.
pub const TECHNICAL_CERTIFICATION_MIN_COUNT: usize = 3;

pub const COMMERCIAL_BASE_SCORE: f64 = 0.6;
pub const COMMERCIAL_DELIVERY_BONUS: f64 = 0.3;
/// Inclusive upper bound on `deliveryTime` (days).
pub const COMMERCIAL_DELIVERY_MAX_DAYS: f64 = 30.0;
pub const COMMERCIAL_WARRANTY_BONUS: f64 = 0.1;
/// Inclusive lower bound on `warranty` (months).
pub const COMMERCIAL_WARRANTY_MIN_MONTHS: f64 = 12.0;

/// Score used when `totalPrice` is absent or not a number.
pub const FINANCIAL_BASE_SCORE: f64 = 0.5;

/// `(inclusive price ceiling, score)` pairs, checked in order.
pub const FINANCIAL_PRICE_TIERS: [(f64, f64); 3] =
    [(100_000.0, 1.0), (500_000.0, 0.8), (1_000_000.0, 0.6)];
/// Score for prices above the last tier ceiling.
pub const FINANCIAL_ABOVE_TIERS_SCORE: f64 = 0.3;

/// Upper clamp applied to the additive dimension scorers.
pub const MAX_DIMENSION_SCORE: f64 = 1.0;

/// Score assigned to a dimension whose proposal was not submitted.
pub const MISSING_PROPOSAL_SCORE: f64 = 0.0;

pub const RISK_MEDIUM_THRESHOLD: f64 = 0.2;
pub const RISK_LOW_THRESHOLD: f64 = 0.6;

pub const STRONGLY_RECOMMENDED_THRESHOLD: f64 = 0.8;
pub const RECOMMENDED_THRESHOLD: f64 = 0.6;
pub const CONDITIONAL_THRESHOLD: f64 = 0.4;
