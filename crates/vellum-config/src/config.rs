//! Configuration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Top level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VellumConfig {
    /// Vaults to scan
    #[serde(default)]
    pub vault: VaultConfig,
    /// Directory traversal settings
    #[serde(default)]
    pub scanner: ScannerConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Vault locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Vault root directories; `~` is expanded by the scanner
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

/// Directory traversal settings for the vault scanner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// File and directory names pruned from the walk
    #[serde(default = "default_skipped_directory_names")]
    pub skipped_directory_names: BTreeSet<String>,
    /// Lowercase file extensions, without the dot, that count as notes
    #[serde(default = "default_supported_extensions")]
    pub supported_extensions: BTreeSet<String>,
    /// Walk into entries whose name starts with `.`
    #[serde(default)]
    pub include_hidden: bool,
    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_links: bool,
    /// Notes larger than this are rejected instead of parsed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_file_size_bytes: Option<u64>,
}

fn default_skipped_directory_names() -> BTreeSet<String> {
    [
        ".obsidian",
        ".trash",
        ".git",
        "node_modules",
        "__pycache__",
        ".DS_Store",
        "Thumbs.db",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_supported_extensions() -> BTreeSet<String> {
    ["md", "markdown"].into_iter().map(String::from).collect()
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            skipped_directory_names: default_skipped_directory_names(),
            supported_extensions: default_supported_extensions(),
            include_hidden: false,
            follow_links: false,
            max_file_size_bytes: None,
        }
    }
}

impl ScannerConfig {
    /// Add a name to prune from the walk
    pub fn with_skipped_directory(mut self, name: impl Into<String>) -> Self {
        self.skipped_directory_names.insert(name.into());
        self
    }

    /// Add a supported extension; a leading dot and case are ignored
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.supported_extensions.insert(normalize_extension(extension));
        self
    }

    /// Set the size limit for a single note
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size_bytes = Some(bytes);
        self
    }

    /// Whether an entry with this file name should be pruned
    pub fn is_excluded_name(&self, name: &str) -> bool {
        (!self.include_hidden && name.starts_with('.'))
            || self.skipped_directory_names.contains(name)
    }

    /// Whether `path` has a supported note extension
    pub fn is_supported_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                self.supported_extensions
                    .iter()
                    .any(|supported| normalize_extension(supported) == ext.to_lowercase())
            })
            .unwrap_or(false)
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim_start_matches('.').to_lowercase()
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter (`error`, `warn`, `info`, `debug`, `trace`, or a
    /// full `EnvFilter` directive). CLI flags take precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}
