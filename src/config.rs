//! # Configuration Module
//!
//! This module provides configuration file support, letting a project pin
//! the options it always checks with instead of repeating them on the
//! command line.
//!
//! Configuration can be specified in a `.apache-license-check.toml` file or
//! via the `APACHE_LICENSE_CHECK_CONFIG` environment variable:
//!
//! ```toml
//! extensions = ["py", "pyi"]
//! exclude = ["build", "docs/conf.py"]
//! include-hidden = false
//! include-empty = false
//! copyright = "Acme Corporation"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::processor::CheckOptions;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".apache-license-check.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "APACHE_LICENSE_CHECK_CONFIG";

/// Configuration loaded from a config file.
///
/// Every field is optional; anything left out falls back to the command line
/// or the built-in default.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  /// Source file extensions to check, without the leading dot.
  #[serde(default)]
  pub extensions: Option<Vec<String>>,

  /// Exact paths to leave out of the traversal.
  #[serde(default)]
  pub exclude: Vec<PathBuf>,

  /// Visit dot-files and dot-directories.
  #[serde(default)]
  pub include_hidden: bool,

  /// Require headers in empty files.
  #[serde(default)]
  pub include_empty: bool,

  /// Substring required in the first copyright line.
  #[serde(default)]
  pub copyright: Option<String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A configured value is invalid.
  #[error("Invalid value for '{key}': {message}")]
  InvalidValue { key: &'static str, message: String },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  ///
  /// # Returns
  ///
  /// The loaded configuration, or an error if the file cannot be read,
  /// parsed, or validated.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    debug!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Checks that:
  /// - The extension list is not empty
  /// - Extensions are non-empty and don't include the leading dot
  /// - The copyright substring is not empty
  fn validate(&self) -> Result<(), ConfigError> {
    if let Some(ref extensions) = self.extensions {
      if extensions.is_empty() {
        return Err(ConfigError::InvalidValue {
          key: "extensions",
          message: "at least one extension is required".to_string(),
        });
      }

      for ext in extensions {
        if ext.is_empty() {
          return Err(ConfigError::InvalidValue {
            key: "extensions",
            message: "extension cannot be empty".to_string(),
          });
        }
        if ext.starts_with('.') {
          return Err(ConfigError::InvalidValue {
            key: "extensions",
            message: format!("extension '{ext}' should not include leading dot"),
          });
        }
      }
    }

    if self.copyright.as_deref() == Some("") {
      return Err(ConfigError::InvalidValue {
        key: "copyright",
        message: "substring cannot be empty".to_string(),
      });
    }

    Ok(())
  }

  /// Converts the configuration into check options.
  pub fn into_options(self) -> CheckOptions {
    let defaults = CheckOptions::default();
    CheckOptions {
      include_hidden: self.include_hidden,
      include_empty: self.include_empty,
      excludes: self.exclude,
      copyright: self.copyright,
      extensions: self.extensions.unwrap_or(defaults.extensions),
    }
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `APACHE_LICENSE_CHECK_CONFIG` environment variable
/// 3. `.apache-license-check.toml` in the base directory
///
/// An explicit path is returned even if it does not exist, so that loading
/// it reports the problem.
pub fn discover_config_path(explicit_path: Option<&Path>, base_dir: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    debug!("Using explicit config path: {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      debug!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    debug!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let local_config = base_dir.join(DEFAULT_CONFIG_FILENAME);
  if local_config.exists() {
    debug!("Using config: {}", local_config.display());
    return Some(local_config);
  }

  debug!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `base_dir` - Directory searched for the default config file
/// * `no_config` - If true, skip config file discovery
///
/// # Returns
///
/// The loaded configuration, or `None` if no config file is in use.
pub fn load_config(explicit_path: Option<&Path>, base_dir: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    debug!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, base_dir) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
