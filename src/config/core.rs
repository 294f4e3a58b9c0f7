use serde::{Deserialize, Serialize};

use super::comparison::ComparisonConfig;
use super::scoring::ScoringThresholds;

/// File searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".mario.toml";

/// Root configuration structure for mario-pricing
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MarioConfig {
    /// Score tier thresholds and neutral score
    #[serde(default)]
    pub scoring: Option<ScoringThresholds>,

    /// Comparison (card) settings
    #[serde(default)]
    pub comparison: Option<ComparisonConfig>,
}

impl MarioConfig {
    pub fn scoring_thresholds(&self) -> ScoringThresholds {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn comparison_config(&self) -> ComparisonConfig {
        self.comparison.clone().unwrap_or_default()
    }
}
