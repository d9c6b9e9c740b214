//! # Vellum Configuration
//!
//! Typed configuration for vault scanning and the command line front end.
//!
//! - TOML or YAML files, chosen by extension
//! - Every field has a default, so an empty file is a valid config
//! - `VELLUM_VAULT_PATH` overrides the configured vault list
//!
//! ```rust,no_run
//! use vellum_config::ConfigLoader;
//!
//! let config = ConfigLoader::load(None)?;
//! println!("{} vault(s)", config.vault.paths.len());
//! # Ok::<(), vellum_config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod loader;

pub use config::*;
pub use loader::*;
