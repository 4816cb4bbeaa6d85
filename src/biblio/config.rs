use crate::error::{BiblioError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "biblio.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Client-side settings, stored in `biblio.json`. The catalog core reads none
/// of these; they only shape how a client builds it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BiblioConfig {
    /// Start from the sample catalog instead of an empty one
    #[serde(default = "default_seed_samples")]
    pub seed_samples: bool,

    /// Default tracing filter when `RUST_LOG` is unset (e.g. "warn", "biblio=debug")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_seed_samples() -> bool {
    true
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for BiblioConfig {
    fn default() -> Self {
        Self {
            seed_samples: default_seed_samples(),
            log_level: default_log_level(),
        }
    }
}

impl BiblioConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BiblioError::Io)?;
        let config: BiblioConfig =
            serde_json::from_str(&content).map_err(BiblioError::Serialization)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BiblioConfig::default();
        assert!(config.seed_samples);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = BiblioConfig::load(dir.path()).unwrap();
        assert_eq!(config, BiblioConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"seed_samples": false, "log_level": "biblio=debug"}"#,
        )
        .unwrap();

        let config = BiblioConfig::load(dir.path()).unwrap();
        assert_eq!(
            config,
            BiblioConfig {
                seed_samples: false,
                log_level: "biblio=debug".to_string(),
            }
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"seed_samples": false}"#).unwrap();

        let config = BiblioConfig::load(dir.path()).unwrap();
        assert!(!config.seed_samples);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let err = BiblioConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, BiblioError::Serialization(_)));
    }
}
