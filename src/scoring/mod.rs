//! Mario Price Score (MPS).
//!
//! A bounded 10-100 value score comparing one price with a reference
//! average, plus the color tier the badge is drawn in.

pub mod mps;
pub mod tiers;

pub use mps::{has_baseline, mario_price_score, PriceScorer, MAX_SCORE, MIN_SCORE, NEUTRAL_SCORE};
pub use tiers::classify_tier;

use crate::core::ScoreResult;

/// Score a price against an average using the default thresholds.
pub fn score_price(price: f64, average_price: f64) -> ScoreResult {
    PriceScorer::default().score(price, average_price)
}
