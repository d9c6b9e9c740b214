//! Scanner error types

use thiserror::Error;
use vellum_core::ParseError;

/// Errors returned by the vault scanner
#[derive(Debug, Error)]
pub enum ScanError {
    /// None of the configured vault paths is an existing directory
    #[error("No valid vault paths provided")]
    NoValidVaults,

    /// A single note could not be read or parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Specialized Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;
