//! Error types for the tally application.

use thiserror::Error;

/// A shared error type for the entire tally application.
///
/// Recoverable input problems (unknown item, bad quantity) are not errors:
/// they are reported as [`crate::order::Rejection`]s and the prompt repeats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// The menu file does not exist
    #[error("Menu file not found: {path}")]
    MenuNotFound { path: String },

    /// The menu file exists but could not be opened
    #[error("Cannot read menu file {path}: {message}")]
    MenuUnreadable { path: String, message: String },

    /// The menu file exists but could not be parsed
    #[error("Malformed menu (line {line}): {message}")]
    MenuParse { line: u64, message: String },

    /// An order entry has no price on the menu
    #[error("Item not on the menu: '{0}'")]
    UnknownItem(String),

    /// The order total does not fit in a decimal
    #[error("Order total is too large")]
    TotalOverflow,

    /// The input source failed
    #[error("Input error: {0}")]
    Input(String),

    /// The user interrupted order collection
    #[error("Order cancelled")]
    Cancelled,

    /// Writing to the order history log failed
    #[error("Order history error: {0}")]
    History(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TallyError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a MenuNotFound error
    pub fn menu_not_found(path: impl Into<String>) -> Self {
        Self::MenuNotFound { path: path.into() }
    }

    /// Creates a MenuUnreadable error
    pub fn menu_unreadable(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MenuUnreadable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a MenuParse error
    pub fn menu_parse(line: u64, message: impl Into<String>) -> Self {
        Self::MenuParse {
            line,
            message: message.into(),
        }
    }

    /// Creates an UnknownItem error
    pub fn unknown_item(name: impl Into<String>) -> Self {
        Self::UnknownItem(name.into())
    }

    /// Creates an Input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// Creates a History error
    pub fn history(message: impl Into<String>) -> Self {
        Self::History(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error came from loading the menu
    pub fn is_menu_load(&self) -> bool {
        matches!(
            self,
            Self::MenuNotFound { .. } | Self::MenuUnreadable { .. } | Self::MenuParse { .. }
        )
    }

    /// Check if this is an UnknownItem error
    pub fn is_unknown_item(&self) -> bool {
        matches!(self, Self::UnknownItem(_))
    }

    /// Check if the user cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Check if this is a History error
    pub fn is_history(&self) -> bool {
        matches!(self, Self::History(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<std::io::Error> for TallyError {
    fn from(e: std::io::Error) -> Self {
        Self::io(e.to_string())
    }
}

/// Result alias used across the tally crates.
pub type Result<T> = std::result::Result<T, TallyError>;
