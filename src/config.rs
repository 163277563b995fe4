//! Configuration loading
//!
//! Reads `~/.config/typeahead/config.toml`. A missing file means defaults; a
//! file that exists but does not parse is an error so typos are not silently
//! ignored.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub mod types;

pub use types::{Config, DropdownConfig, SourceConfig, StrategyKind};

use crate::error::AppError;

const CONFIG_DIR: &str = "typeahead";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load config from `path`, or from the default location when `None`
///
/// Only the default location may be absent; a path the user named must exist.
pub fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    match path {
        Some(p) => read_config(p, true),
        None => match config_path() {
            Some(p) => load_config_from_path(&p),
            None => Ok(Config::default()),
        },
    }
}

/// Load config from `path`, falling back to defaults if it does not exist
pub fn load_config_from_path(path: &Path) -> Result<Config, AppError> {
    read_config(path, false)
}

fn read_config(path: &Path, required: bool) -> Result<Config, AppError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound && required => {
            return Err(AppError::ConfigNotFound(path.to_path_buf()));
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(e) => return Err(AppError::Io(e)),
    };

    toml::from_str(&contents).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })
}
