use crate::config::ScoringThresholds;
use crate::core::ColorTier;

impl ColorTier {
    /// Tier for a score under the default 85 / 70 / 50 thresholds.
    pub fn from_score(score: u8) -> Self {
        classify_tier(score, &ScoringThresholds::default())
    }
}

/// Map a score onto its display tier.
pub fn classify_tier(score: u8, thresholds: &ScoringThresholds) -> ColorTier {
    if score >= thresholds.excellent {
        ColorTier::Excellent
    } else if score >= thresholds.good {
        ColorTier::Good
    } else if score >= thresholds.fair {
        ColorTier::Fair
    } else {
        ColorTier::Poor
    }
}
