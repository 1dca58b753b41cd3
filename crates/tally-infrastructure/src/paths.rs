//! Path management for tally configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ./tally.toml                 # Per-directory configuration (checked first)
//! ~/.config/tally/             # User config directory
//! └── config.toml              # User configuration
//! ```

use std::path::PathBuf;

/// Name of the config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "tally.toml";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find user config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct TallyPaths;

impl TallyPaths {
    /// Returns the tally configuration directory (e.g. `~/.config/tally/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("tally"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the user configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the per-directory configuration file.
    pub fn local_config_file() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }
}
