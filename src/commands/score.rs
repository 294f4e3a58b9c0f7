use anyhow::Result;
use std::path::PathBuf;

use crate::io::{create_writer, OutputFormat};
use crate::scoring::PriceScorer;

#[derive(Debug, Clone)]
pub struct ScoreConfig {
    pub price: f64,
    pub average: f64,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
}

pub fn handle_score(config: ScoreConfig) -> Result<()> {
    let settings = super::resolve_config(config.config.as_deref())?;
    let scorer = PriceScorer::new(settings.scoring_thresholds());
    let result = scorer.score(config.price, config.average);

    let mut writer = create_writer(config.format, Box::new(std::io::stdout()), true);
    writer.write_score(config.price, config.average, &result)?;
    writer.flush()?;
    Ok(())
}
