//! Vault Scanner
//!
//! Discovers notes in one or more vault directories and turns them into
//! `NoteRecord`s:
//! - path validation (missing or non-directory vaults are skipped)
//! - recursive discovery honoring the configured skip list and extensions
//! - async reading and parsing with per-note failure isolation
//! - aggregate statistics per vault

pub mod error;
pub mod scanner;
pub mod stats;

pub use error::{ScanError, ScanResult};
pub use scanner::{BatchReport, NoteFailure, VaultFile, VaultScanner};
pub use stats::{VaultStats, VaultSummary};
