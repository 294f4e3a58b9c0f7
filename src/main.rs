use anyhow::Result;
use mario_pricing::cli::{self, Commands};
use mario_pricing::commands::{compare::CompareConfig, score::ScoreConfig};

fn main() -> Result<()> {
    let cli = cli::parse_args();

    match cli.command {
        Commands::Compare {
            input,
            format,
            output,
            config,
            verbosity,
        } => {
            cli::init_logging(verbosity);
            mario_pricing::commands::compare::handle_compare(CompareConfig {
                input,
                format: format.into(),
                output,
                config,
            })
        }
        Commands::Score {
            price,
            average,
            format,
            config,
            verbosity,
        } => {
            cli::init_logging(verbosity);
            mario_pricing::commands::score::handle_score(ScoreConfig {
                price,
                average,
                format: format.into(),
                config,
            })
        }
        Commands::Init { force } => {
            cli::init_logging(0);
            mario_pricing::commands::init::init_config(force)
        }
    }
}
