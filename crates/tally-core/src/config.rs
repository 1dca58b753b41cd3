use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_MENU_FILE: &str = "menu.csv";
pub const DEFAULT_HISTORY_FILE: &str = "order_history.csv";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings.
///
/// Every field is optional in the config file; missing ones keep their
/// defaults.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TallyConfig {
    /// CSV file with `Item` and `Price` columns
    pub menu_path: PathBuf,
    /// Append-only CSV log of confirmed orders
    pub history_path: PathBuf,
    /// `tracing` filter directive, e.g. `warn` or `tally_core=debug`
    pub log_level: String,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            menu_path: PathBuf::from(DEFAULT_MENU_FILE),
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values given on the command line; each one replaces the configured value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub menu_path: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl TallyConfig {
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(menu_path) = overrides.menu_path {
            self.menu_path = menu_path;
        }
        if let Some(history_path) = overrides.history_path {
            self.history_path = history_path;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        self
    }
}
