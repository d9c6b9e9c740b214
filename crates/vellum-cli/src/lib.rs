//! `vellum` command line interface
//!
//! Wires configuration, logging and the vault scanner together for the
//! `scan`, `parse`, `index` and `stats` subcommands.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
