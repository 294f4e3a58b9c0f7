use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::comparison::compare_procedure;
use crate::io::{create_writer, read_procedure_orgs, OutputFormat};

#[derive(Debug, Clone)]
pub struct CompareConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn handle_compare(config: CompareConfig) -> Result<()> {
    let settings = super::resolve_config(config.config.as_deref())?;
    let listing = read_procedure_orgs(&config.input)
        .with_context(|| format!("Failed to read price records from {}", config.input.display()))?;

    let comparison = compare_procedure(&listing, &settings);
    log::info!(
        "Compared {} records across {} facilities",
        listing.orgs.len(),
        comparison.cards.len()
    );

    let destination = super::open_destination(config.output.as_ref())?;
    let mut writer = create_writer(config.format, destination, config.output.is_none());
    writer.write_comparison(&comparison)?;
    writer.flush().with_context(|| match &config.output {
        Some(path) => format!("Failed to write report to {}", path.display()),
        None => "Failed to write report to stdout".to_string(),
    })?;
    Ok(())
}
