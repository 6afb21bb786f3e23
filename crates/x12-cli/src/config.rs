//! CLI configuration file

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use x12_segments::Delimiters;

/// Errors raised while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Delimiters {
        path: PathBuf,
        source: x12_segments::Error,
    },
}

/// Settings read from `--config`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub delimiters: Option<Delimiters>,
}

impl CliConfig {
    /// Parse configuration YAML
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML or unknown keys and
    /// [`ConfigError::Delimiters`] for unusable delimiters.
    pub fn from_yaml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(delimiters) = &config.delimiters {
            delimiters
                .validate()
                .map_err(|source| ConfigError::Delimiters {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        Ok(config)
    }

    /// Load the configuration file, or the empty configuration when no
    /// path is given
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// the errors of [`CliConfig::from_yaml`].
    pub async fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_yaml(path, &text)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Delimiters for rendering, falling back to the X12 defaults
    #[must_use]
    pub fn delimiters(&self) -> Delimiters {
        if let Some(delimiters) = &self.delimiters {
            return delimiters.clone();
        }
        info!("No delimiters configured, using * : ^ ~");
        Delimiters::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> &'static Path {
        Path::new("x12.yaml")
    }

    #[test]
    fn test_partial_delimiters() {
        let config = CliConfig::from_yaml(path(), "delimiters:\n  element: \"|\"\n").unwrap();
        let delimiters = config.delimiters();
        assert_eq!(delimiters.element, '|');
        assert_eq!(delimiters.segment_terminator, "~");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CliConfig::from_yaml(path(), "{}").unwrap();
        assert_eq!(config.delimiters(), Delimiters::default());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = CliConfig::from_yaml(path(), "colour: neon\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("x12.yaml"));
    }

    #[test]
    fn test_rejects_colliding_delimiters() {
        let err = CliConfig::from_yaml(path(), "delimiters:\n  component: \"*\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Delimiters { .. }));
    }

    #[tokio::test]
    async fn test_load_without_path() {
        let config = CliConfig::load(None).await.unwrap();
        assert!(config.delimiters.is_none());
    }
}
