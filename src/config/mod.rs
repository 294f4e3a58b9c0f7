// Sub-modules
mod comparison;
mod core;
mod loader;
mod scoring;

pub use comparison::{default_mario_pick_threshold, ComparisonConfig};
pub use self::core::{MarioConfig, CONFIG_FILE_NAME};
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config,
};
pub use scoring::{
    default_excellent_threshold, default_fair_threshold, default_good_threshold,
    default_neutral_score, ScoringThresholds,
};

/// Default `.mario.toml` written by `mario-pricing init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Mario Pricing Configuration

[scoring]
# Minimum Mario Price Score for each badge tier
excellent = 85
good = 70
fair = 50
# Score used when no reference average price is available
neutral_score = 75

[comparison]
# The first card is marked "Mario's Pick" when its score exceeds this value
mario_pick_threshold = 80
"#;
