use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::{MarioConfig, CONFIG_FILE_NAME};
use super::scoring::ScoringThresholds;
use crate::core::errors::ResultExt;
use crate::core::{Error, Result};

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse a `.mario.toml` document.
///
/// Invalid scoring thresholds are replaced by the defaults with a warning;
/// only TOML syntax or type errors are reported as errors.
pub fn parse_and_validate_config(contents: &str) -> Result<MarioConfig> {
    let mut config = toml::from_str::<MarioConfig>(contents)?;

    if let Some(ref scoring) = config.scoring {
        if let Err(e) = scoring.validate() {
            log::warn!("Invalid scoring thresholds: {}. Using defaults.", e);
            config.scoring = Some(ScoringThresholds::default());
        }
    }

    Ok(config)
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// malformed file is an error here.
pub fn load_config_from_path(path: &Path) -> Result<MarioConfig> {
    let contents = read_config_file(path).map_err(|e| Error::io_at(path, e))?;
    let config = parse_and_validate_config(&contents)
        .context(format!("failed to parse {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<MarioConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("Failed to parse {}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find `.mario.toml` in `start` or one of its ancestors, falling back to
/// defaults when none is found or readable.
pub fn load_config_from(start: PathBuf) -> MarioConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            MarioConfig::default()
        })
}

pub fn load_config() -> MarioConfig {
    match std::env::current_dir() {
        Ok(current) => load_config_from(current),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            MarioConfig::default()
        }
    }
}
