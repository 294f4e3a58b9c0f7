//! Thresholds that turn a Mario Price Score into a display tier.

use serde::{Deserialize, Serialize};

/// Score tier thresholds configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringThresholds {
    /// Lowest score drawn as "excellent" (green)
    #[serde(default = "default_excellent_threshold")]
    pub excellent: u8,

    /// Lowest score drawn as "good" (blue)
    #[serde(default = "default_good_threshold")]
    pub good: u8,

    /// Lowest score drawn as "fair" (orange); anything below is "poor"
    #[serde(default = "default_fair_threshold")]
    pub fair: u8,

    /// Score reported when there is no usable average price
    #[serde(default = "default_neutral_score")]
    pub neutral_score: u8,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            excellent: default_excellent_threshold(),
            good: default_good_threshold(),
            fair: default_fair_threshold(),
            neutral_score: default_neutral_score(),
        }
    }
}

impl ScoringThresholds {
    // Pure function: Check a score lies on the MPS scale
    pub fn is_valid_score(score: u8) -> bool {
        (10..=100).contains(&score)
    }

    /// Thresholds must be strictly descending and every value on the 10-100 scale.
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("excellent", self.excellent),
            ("good", self.good),
            ("fair", self.fair),
            ("neutral_score", self.neutral_score),
        ] {
            if !Self::is_valid_score(value) {
                return Err(format!("{} must be between 10 and 100, got {}", name, value));
            }
        }

        if !(self.excellent > self.good && self.good > self.fair) {
            return Err(format!(
                "tier thresholds must descend (excellent > good > fair), got {} / {} / {}",
                self.excellent, self.good, self.fair
            ));
        }

        Ok(())
    }
}

pub fn default_excellent_threshold() -> u8 {
    85
}

pub fn default_good_threshold() -> u8 {
    70
}

pub fn default_fair_threshold() -> u8 {
    50
}

pub fn default_neutral_score() -> u8 {
    75
}
