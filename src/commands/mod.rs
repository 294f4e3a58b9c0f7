pub mod compare;
pub mod init;
pub mod score;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{load_config, load_config_from_path, MarioConfig};

/// Explicit `--config` must load; otherwise discover `.mario.toml`.
pub(crate) fn resolve_config(path: Option<&Path>) -> Result<MarioConfig> {
    match path {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Destination for a report: the given file, or stdout.
pub(crate) fn open_destination(output: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            // Files never get ANSI escapes
            colored::control::set_override(false);
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
