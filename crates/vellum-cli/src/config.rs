//! Effective configuration for a CLI run

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use vellum_config::{ConfigLoader, VellumConfig, VAULT_PATH_ENV};

/// Load config with precedence defaults < file < env
pub fn load(config_file: Option<&Path>) -> Result<VellumConfig> {
    ConfigLoader::load(config_file).context("Failed to load configuration")
}

/// Vault paths from command line arguments, falling back to configuration
pub fn resolve_vaults(args: &[PathBuf], config: &VellumConfig) -> Result<Vec<PathBuf>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }
    if config.vault.paths.is_empty() {
        bail!(
            "No vault paths given; pass them as arguments, set {} or add [vault] paths to the config file",
            VAULT_PATH_ENV
        );
    }
    Ok(config.vault.paths.clone())
}
