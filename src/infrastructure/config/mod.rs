//! Configuration loading infrastructure
//!
//! - YAML dotfile loading with an injectable default path
//! - Strict top-level key validation against the schema
//! - Typed load errors

pub mod loader;

pub use loader::{load_config, ConfigError, ConfigLoader, DEFAULT_CONFIG_FILE_NAME};
