//! Configuration loading
//!
//! Precedence: defaults < config file < environment. Command line overrides
//! are applied by the caller on the returned value.

use crate::config::VellumConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable holding vault paths, separated like `PATH`
pub const VAULT_PATH_ENV: &str = "VELLUM_VAULT_PATH";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or type error
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML syntax or type error
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Extension is neither TOML nor YAML
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Config file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Loads `VellumConfig` from files and the environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config location (`<config dir>/vellum/config.toml`)
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vellum").join("config.toml"))
    }

    /// Parse config text in the given format
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<VellumConfig, ConfigError> {
        let config = match format {
            ConfigFormat::Toml => toml::from_str(content)?,
            ConfigFormat::Yaml if content.trim().is_empty() => VellumConfig::default(),
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(config)
    }

    /// Read and parse a config file
    pub fn load_from_file(path: &Path) -> Result<VellumConfig, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?format, "Loaded config file");
        Self::load_from_str(&content, format)
    }

    /// Load configuration with precedence: defaults < file < env.
    ///
    /// An explicit `config_file` must exist. Without one, the default path is
    /// used when present and defaults otherwise.
    pub fn load(config_file: Option<&Path>) -> Result<VellumConfig, ConfigError> {
        let config = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::load_from_file(&path)?,
                None => {
                    debug!("No config file found, using defaults");
                    VellumConfig::default()
                }
            },
        };

        Ok(Self::apply_env_overrides(config, |key| std::env::var_os(key)))
    }

    /// Apply environment overrides using `lookup` to read variables
    pub fn apply_env_overrides<F>(mut config: VellumConfig, lookup: F) -> VellumConfig
    where
        F: Fn(&str) -> Option<std::ffi::OsString>,
    {
        if let Some(value) = lookup(VAULT_PATH_ENV) {
            let paths: Vec<PathBuf> = std::env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            debug!(count = paths.len(), "Vault paths overridden from {}", VAULT_PATH_ENV);
            config.vault.paths = paths;
        }
        config
    }
}
