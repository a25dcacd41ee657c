use serde::{Deserialize, Serialize};

/// Top-level keys accepted in a configuration file.
///
/// Used by the loader to reject any other top-level key by name. Must be
/// kept in sync with the fields of [`PfnoptConfig`].
pub const RECOGNIZED_KEYS: &[&str] = &["default_storage"];

/// Per-user configuration record
///
/// Immutable once constructed; every field has a documented default so a
/// missing or empty configuration file is equivalent to [`Self::base`].
/// Equality is structural.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PfnoptConfig {
    /// Storage URL used when a study is created without an explicit one.
    /// Unset when absent from the file.
    #[serde(default)]
    pub default_storage: Option<String>,
}

impl PfnoptConfig {
    /// The record with every field at its documented default.
    #[must_use]
    pub fn base() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_config_has_no_storage() {
        assert_eq!(PfnoptConfig::base().default_storage, None);
    }

    #[test]
    fn test_structural_equality() {
        let a = PfnoptConfig {
            default_storage: Some("sqlite:///example.db".to_string()),
        };
        let b = PfnoptConfig {
            default_storage: Some("sqlite:///example.db".to_string()),
        };
        assert_eq!(a, b);
        assert_ne!(a, PfnoptConfig::base());
    }

    #[test]
    fn test_recognized_keys_match_fields() {
        // serde sees exactly the fields named in the allow-list
        let yaml = RECOGNIZED_KEYS
            .iter()
            .map(|key| format!("{key}: value\n"))
            .collect::<String>();
        let config: PfnoptConfig = serde_yaml::from_str(&yaml).expect("YAML should parse");
        assert_eq!(config.default_storage.as_deref(), Some("value"));
    }

    #[test]
    fn test_missing_field_defaults_to_none() {
        let config: PfnoptConfig = serde_yaml::from_str("{}").expect("YAML should parse");
        assert_eq!(config, PfnoptConfig::base());
    }
}
