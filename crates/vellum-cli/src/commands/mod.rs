pub mod index;
pub mod parse;
pub mod scan;
pub mod stats;

use anyhow::Result;
use std::path::PathBuf;
use vellum_config::VellumConfig;
use vellum_scanner::VaultScanner;

/// Build a scanner over the effective vault list
pub(crate) fn scanner(config: &VellumConfig, vaults: &[PathBuf]) -> Result<VaultScanner> {
    let vaults = crate::config::resolve_vaults(vaults, config)?;
    Ok(VaultScanner::new(vaults, config.scanner.clone())?)
}
