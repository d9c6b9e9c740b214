//! Aggregate vault statistics

use crate::scanner::VaultScanner;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Statistics for every configured vault
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultStats {
    pub total_vaults: usize,
    pub vaults: Vec<VaultSummary>,
}

/// Statistics for a single vault
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultSummary {
    pub name: String,
    pub path: PathBuf,
    pub total_files: usize,
    /// Sum of note sizes in bytes
    pub total_size: u64,
    /// Most recent modification time, `None` for a vault without notes
    pub last_modified: Option<DateTime<Utc>>,
}

impl VaultStats {
    /// Notes across all vaults
    pub fn total_files(&self) -> usize {
        self.vaults.iter().map(|v| v.total_files).sum()
    }

    /// Bytes across all vaults
    pub fn total_size(&self) -> u64 {
        self.vaults.iter().map(|v| v.total_size).sum()
    }
}

impl VaultScanner {
    /// Count notes, bytes and the latest modification per vault
    pub fn stats(&self) -> VaultStats {
        let vaults: Vec<VaultSummary> = self
            .vault_paths()
            .iter()
            .map(|vault_path| {
                let files = self.scan_vault(vault_path);
                VaultSummary {
                    name: vault_path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    path: vault_path.clone(),
                    total_files: files.len(),
                    total_size: files.iter().map(|f| f.size).sum(),
                    last_modified: files.iter().map(|f| f.modified_time).max(),
                }
            })
            .collect();

        VaultStats {
            total_vaults: vaults.len(),
            vaults,
        }
    }
}
