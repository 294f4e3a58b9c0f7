use serde::{Deserialize, Serialize};

/// Comparison card configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// The first card becomes "Mario's Pick" when its score is above this
    #[serde(default = "default_mario_pick_threshold")]
    pub mario_pick_threshold: u8,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            mario_pick_threshold: default_mario_pick_threshold(),
        }
    }
}

pub fn default_mario_pick_threshold() -> u8 {
    80
}
