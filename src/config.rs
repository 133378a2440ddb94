//! User configuration loaded from `config.toml`.
//!
//! Every field is optional; anything left out falls back to the defaults.

use crate::calculator::DisplayOptions;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "keypad";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayOptions,
    pub window: WindowConfig,
}

/// Initial window size in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 600.0,
        }
    }
}

/// Path of the config file in the user's config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

impl Config {
    /// Load the config.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried, and a missing file there yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => {
                    tracing::debug!("No config directory available, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound && !required => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = Self::parse(&contents, &path)?;

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate config text that did not come from a file.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Self::parse(contents, Path::new(""))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display.max_len == 0 {
            return Err(ConfigError::Invalid(
                "display.max_len must be at least 1".to_string(),
            ));
        }
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{DEFAULT_EXPONENT_PRECISION, DEFAULT_MAX_DISPLAY_LEN};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.max_len, DEFAULT_MAX_DISPLAY_LEN);
        assert_eq!(config.display.exponent_precision, DEFAULT_EXPONENT_PRECISION);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config = Config::from_toml("[display]\nmax_len = 8\n").unwrap();
        assert_eq!(config.display.max_len, 8);
        assert_eq!(config.display.exponent_precision, DEFAULT_EXPONENT_PRECISION);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            r#"
            [display]
            max_len = 16
            exponent_precision = 3

            [window]
            width = 400.0
            height = 700.0
            "#,
        )
        .unwrap();
        assert_eq!(config.display.max_len, 16);
        assert_eq!(config.display.exponent_precision, 3);
        assert_eq!(config.window.width, 400.0);
        assert_eq!(config.window.height, 700.0);
    }

    #[test]
    fn test_zero_max_len_rejected() {
        let err = Config::from_toml("[display]\nmax_len = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_negative_window_rejected() {
        let err = Config::from_toml("[window]\nwidth = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = Config::from_toml("[display\nmax_len = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = std::env::temp_dir().join("keypad-test-missing/config.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("keypad-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        std::fs::write(&path, "[display]\nexponent_precision = 2\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.display.exponent_precision, 2);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_default_path_ends_with_app_file() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("keypad/config.toml"));
        }
    }
}
