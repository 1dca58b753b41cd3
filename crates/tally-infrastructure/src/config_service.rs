//! Configuration resolution.
//!
//! Defaults are replaced by the first config file found, which is in turn
//! replaced by command-line overrides:
//!
//! 1. the file passed explicitly (must exist)
//! 2. `./tally.toml`
//! 3. `~/.config/tally/config.toml`

use std::path::{Path, PathBuf};

use tally_core::{ConfigOverrides, Result, TallyConfig, TallyError};

use crate::paths::TallyPaths;
use crate::storage::TomlFile;

pub struct ConfigService {
    explicit: Option<PathBuf>,
    local: PathBuf,
    user: Option<PathBuf>,
}

impl ConfigService {
    /// Uses the standard local and user config locations.
    pub fn new(explicit: Option<PathBuf>) -> Self {
        let user = match TallyPaths::config_file() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::debug!("No user config location: {}", e);
                None
            }
        };
        Self::with_locations(explicit, TallyPaths::local_config_file(), user)
    }

    pub fn with_locations(explicit: Option<PathBuf>, local: PathBuf, user: Option<PathBuf>) -> Self {
        Self {
            explicit,
            local,
            user,
        }
    }

    /// Returns the config file that will be read, if any.
    pub fn resolve_path(&self) -> Result<Option<PathBuf>> {
        if let Some(explicit) = &self.explicit {
            if !explicit.is_file() {
                return Err(TallyError::config(format!(
                    "config file not found: {}",
                    explicit.display()
                )));
            }
            return Ok(Some(explicit.clone()));
        }

        Ok([Some(&self.local), self.user.as_ref()]
            .into_iter()
            .flatten()
            .find(|path| path.is_file())
            .cloned())
    }

    /// Loads the config file (if any) and applies `overrides`.
    pub fn load(&self, overrides: ConfigOverrides) -> Result<TallyConfig> {
        let config = match self.resolve_path()? {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                load_file(&path)?
            }
            None => TallyConfig::default(),
        };

        Ok(config.with_overrides(overrides))
    }
}

fn load_file(path: &Path) -> Result<TallyConfig> {
    TomlFile::<TallyConfig>::new(path.to_path_buf())
        .load()
        .map(Option::unwrap_or_default)
        .map_err(|e| TallyError::config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn service(temp_dir: &TempDir, explicit: Option<PathBuf>) -> ConfigService {
        ConfigService::with_locations(
            explicit,
            temp_dir.path().join("tally.toml"),
            Some(temp_dir.path().join("user").join("config.toml")),
        )
    }

    #[test]
    fn test_defaults_without_files() {
        let temp_dir = TempDir::new().unwrap();
        let config = service(&temp_dir, None)
            .load(ConfigOverrides::default())
            .unwrap();
        assert_eq!(config, TallyConfig::default());
    }

    #[test]
    fn test_local_file_wins_over_user_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("tally.toml"), "menu_path = \"local.csv\"\n").unwrap();
        fs::create_dir_all(temp_dir.path().join("user")).unwrap();
        fs::write(
            temp_dir.path().join("user").join("config.toml"),
            "menu_path = \"user.csv\"\nlog_level = \"debug\"\n",
        )
        .unwrap();

        let config = service(&temp_dir, None)
            .load(ConfigOverrides::default())
            .unwrap();

        assert_eq!(config.menu_path, PathBuf::from("local.csv"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_user_file_used_when_no_local_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("user")).unwrap();
        fs::write(
            temp_dir.path().join("user").join("config.toml"),
            "history_path = \"/var/tmp/orders.csv\"\n",
        )
        .unwrap();

        let config = service(&temp_dir, None)
            .load(ConfigOverrides::default())
            .unwrap();

        assert_eq!(config.history_path, PathBuf::from("/var/tmp/orders.csv"));
        assert_eq!(config.menu_path, PathBuf::from("menu.csv"));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("custom.toml");
        fs::write(&explicit, "menu_path = \"file.csv\"\n").unwrap();

        let config = service(&temp_dir, Some(explicit))
            .load(ConfigOverrides {
                menu_path: Some(PathBuf::from("flag.csv")),
                ..ConfigOverrides::default()
            })
            .unwrap();

        assert_eq!(config.menu_path, PathBuf::from("flag.csv"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = service(&temp_dir, Some(temp_dir.path().join("nope.toml")))
            .load(ConfigOverrides::default())
            .unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("tally.toml"), "menu = \"typo.csv\"\n").unwrap();

        let err = service(&temp_dir, None)
            .load(ConfigOverrides::default())
            .unwrap_err();
        assert!(err.is_config());
    }
}
