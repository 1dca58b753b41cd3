//! Storage layer for configuration files.

mod toml_file;

pub use toml_file::{TomlFile, TomlFileError};
