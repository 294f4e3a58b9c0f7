//! CLI module for mario-pricing
//!
//! This module provides the command-line interface, including:
//! - Argument parsing (`args`)
//! - Runtime setup such as logging (`setup`)

pub mod args;
pub mod setup;

pub use args::{Cli, Commands, OutputFormat};
pub use setup::{init_logging, verbosity_filter};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    use clap::Parser;
    Cli::parse()
}
