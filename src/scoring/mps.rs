use super::tiers::classify_tier;
use crate::config::ScoringThresholds;
use crate::core::ScoreResult;

pub const MIN_SCORE: u8 = 10;
pub const MAX_SCORE: u8 = 100;

/// Score returned when there is no usable baseline to compare against.
pub const NEUTRAL_SCORE: u8 = 75;

/// Piecewise-linear bands over `ratio = price / average`.
///
/// Each entry is `(upper ratio bound, band floor, band width, score span)`;
/// within a band the score falls linearly from `floor + span` at the lower
/// bound to `floor` at the upper bound.
const BANDS: [(f64, f64, f64, f64); 4] = [
    (0.6, 90.0, 0.6, 10.0),
    (0.9, 75.0, 0.3, 15.0),
    (1.1, 60.0, 0.2, 15.0),
    (1.5, 40.0, 0.4, 20.0),
];

/// Past the last band the score keeps falling by 30 points per 1.0 of ratio.
const TAIL_FLOOR: f64 = 40.0;
const TAIL_START: f64 = 1.5;
const TAIL_SLOPE: f64 = 30.0;

/// True when `average_price` can serve as a scoring baseline.
pub fn has_baseline(average_price: f64) -> bool {
    average_price.is_finite() && average_price > 0.0
}

/// Mario Price Score of `price` relative to `average_price`, in `[10, 100]`.
///
/// Cheaper than average scores higher. Without a positive finite average,
/// or for a non-finite price, the neutral score of 75 is returned.
pub fn mario_price_score(price: f64, average_price: f64) -> u8 {
    score_with_neutral(price, average_price, NEUTRAL_SCORE)
}

fn score_with_neutral(price: f64, average_price: f64, neutral: u8) -> u8 {
    if !has_baseline(average_price) || !price.is_finite() {
        return neutral;
    }

    let raw = raw_score(price / average_price);
    raw.round().clamp(MIN_SCORE as f64, MAX_SCORE as f64) as u8
}

// Pure function: unrounded score for a price ratio
fn raw_score(ratio: f64) -> f64 {
    let mut lower = 0.0;
    for (upper, floor, width, span) in BANDS {
        if ratio <= upper {
            return floor + (1.0 - (ratio - lower) / width) * span;
        }
        lower = upper;
    }

    (TAIL_FLOOR - ((ratio - TAIL_START) / 1.0) * TAIL_SLOPE).max(MIN_SCORE as f64)
}

/// Scorer bound to a set of tier thresholds and neutral score.
#[derive(Debug, Clone, Default)]
pub struct PriceScorer {
    thresholds: ScoringThresholds,
}

impl PriceScorer {
    pub fn new(thresholds: ScoringThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ScoringThresholds {
        &self.thresholds
    }

    pub fn score(&self, price: f64, average_price: f64) -> ScoreResult {
        let score = score_with_neutral(price, average_price, self.thresholds.neutral_score);
        ScoreResult {
            score,
            tier: classify_tier(score, &self.thresholds),
        }
    }
}
