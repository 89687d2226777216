use std::fs;
use std::path::{Path, PathBuf};

use super::core::LogsleuthConfig;
use super::validation::{normalize_config, validate_config};
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".logsleuth.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from a TOML string.
///
/// Invalid values are replaced by their defaults; only malformed TOML fails.
pub fn parse_config(contents: &str) -> Result<LogsleuthConfig> {
    let config = toml::from_str::<LogsleuthConfig>(contents).map_err(|e| {
        Error::Configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;

    match validate_config(&config) {
        Ok(()) => Ok(config),
        Err(_) => Ok(normalize_config(config)),
    }
}

/// Try loading config from a specific path; `None` if missing or invalid
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<LogsleuthConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries
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

/// Search `start` and its ancestors for the nearest config file
pub fn load_config_from(start: PathBuf) -> LogsleuthConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LogsleuthConfig::default()
        })
}

pub fn load_config() -> LogsleuthConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            LogsleuthConfig::default()
        }
    }
}
