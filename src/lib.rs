//! Pfnopt configuration loading
//!
//! Reads the per-user YAML dotfile (`~/.pfnopt.yml`) and produces an
//! immutable [`PfnoptConfig`] record with defaults filled in for absent
//! keys. Unknown top-level keys and non-mapping documents are rejected
//! with typed errors.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the configuration record and its schema
//! - **Infrastructure Layer** (`infrastructure`): file access and YAML
//!   parsing behind [`ConfigLoader`]
//!
//! # Example
//!
//! ```no_run
//! use pfnopt_config::load_config;
//!
//! let config = load_config(None)?;
//! if let Some(storage) = &config.default_storage {
//!     println!("default storage: {storage}");
//! }
//! # Ok::<(), pfnopt_config::ConfigError>(())
//! ```

pub mod domain;
pub mod infrastructure;

// Re-export the public surface for convenience
pub use domain::models::{PfnoptConfig, RECOGNIZED_KEYS};
pub use infrastructure::config::{load_config, ConfigError, ConfigLoader, DEFAULT_CONFIG_FILE_NAME};
