use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::models::config::{PfnoptConfig, RECOGNIZED_KEYS};

/// File name of the per-user configuration dotfile, looked up under the
/// home directory.
pub const DEFAULT_CONFIG_FILE_NAME: &str = ".pfnopt.yml";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file is not valid YAML")]
    Parse(#[from] serde_yaml::Error),

    #[error("config root must be a mapping")]
    NotAMapping,

    #[error("unrecognized config key: {0}")]
    UnrecognizedKey(String),
}

/// Loads [`PfnoptConfig`] from a YAML dotfile
///
/// The fallback path consulted when no explicit path is given is fixed at
/// construction, so tests can point the loader at a scratch directory
/// instead of the user's home.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    default_path: PathBuf,
}

impl ConfigLoader {
    /// Loader whose fallback path is `~/.pfnopt.yml`.
    ///
    /// Falls back to a path relative to the working directory when the
    /// home directory cannot be determined.
    #[must_use]
    pub fn new() -> Self {
        let home = dirs::home_dir().unwrap_or_default();
        Self {
            default_path: home.join(DEFAULT_CONFIG_FILE_NAME),
        }
    }

    /// Loader with an explicit fallback path.
    pub fn with_default_path(path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: path.into(),
        }
    }

    /// Path consulted when [`Self::load`] is called without a path.
    #[must_use]
    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// Load configuration from `path`, or from the default path when
    /// `path` is `None`.
    ///
    /// A missing file at an explicit path is an I/O error; a missing file
    /// at the default path means no configuration was ever written and
    /// yields the base record. Any other read failure is an error for
    /// both.
    pub fn load(&self, path: Option<&Path>) -> Result<PfnoptConfig, ConfigError> {
        let (resolved, explicit) = match path {
            Some(path) => (path, true),
            None => (self.default_path.as_path(), false),
        };

        let contents = match fs::read_to_string(resolved) {
            Ok(contents) => contents,
            Err(source) if !explicit && source.kind() == ErrorKind::NotFound => {
                debug!(path = %resolved.display(), "no config file at default path, using base config");
                return Ok(PfnoptConfig::base());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: resolved.to_path_buf(),
                    source,
                })
            }
        };

        let config = parse_document(&contents)?;
        debug!(path = %resolved.display(), "loaded config file");
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration with the standard `~/.pfnopt.yml` fallback.
pub fn load_config(path: Option<&Path>) -> Result<PfnoptConfig, ConfigError> {
    ConfigLoader::new().load(path)
}

/// Parse a YAML document and validate it against the config schema.
fn parse_document(contents: &str) -> Result<PfnoptConfig, ConfigError> {
    let root: Value = serde_yaml::from_str(contents)?;

    let mapping = match root {
        // An empty file deserializes to null; treat it as a mapping with
        // no keys.
        Value::Null => return Ok(PfnoptConfig::base()),
        Value::Mapping(mapping) => mapping,
        _ => return Err(ConfigError::NotAMapping),
    };

    for key in mapping.keys() {
        match key.as_str() {
            Some(key) if RECOGNIZED_KEYS.contains(&key) => {}
            Some(key) => return Err(ConfigError::UnrecognizedKey(key.to_string())),
            None => return Err(ConfigError::UnrecognizedKey(format!("{key:?}"))),
        }
    }

    let config = serde_yaml::from_value(Value::Mapping(mapping))?;
    Ok(config)
}
