// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod core;
pub mod io;
pub mod pricing;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    ColorTier, OrgGroup, Price, PriceRange, PriceRecord, ProcedureOrgs, ScoreResult,
    UNKNOWN_ORGANIZATION,
};

pub use crate::pricing::{average_min_price, group_by_org, parse_price, parse_price_str};

pub use crate::scoring::{classify_tier, mario_price_score, score_price, PriceScorer};

pub use crate::comparison::{
    compare_orgs, compare_procedure, display_price, format_usd, original_price,
    savings_percentage, Comparison, OrgCard,
};

pub use crate::config::{load_config, MarioConfig, ScoringThresholds};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
