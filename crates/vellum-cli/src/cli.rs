use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per item
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Parser)]
#[command(name = "vellum")]
#[command(about = "vellum - parse Obsidian-style vaults into portable note records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses config file value or defaults to 'warn'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/vellum/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List note files found in the vaults
    Scan {
        /// Vault directories (override config and VELLUM_VAULT_PATH)
        vaults: Vec<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Parse a single note and print its record as JSON
    Parse {
        /// Note file
        file: PathBuf,
    },

    /// Parse every note in the vaults and print one JSON record per line
    Index {
        /// Vault directories (override config and VELLUM_VAULT_PATH)
        vaults: Vec<PathBuf>,

        /// Exit with an error when any note fails to parse
        #[arg(long)]
        strict: bool,
    },

    /// Show file counts and sizes per vault
    Stats {
        /// Vault directories (override config and VELLUM_VAULT_PATH)
        vaults: Vec<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Cli {
    /// Log filter from flags, falling back to the configured directive
    pub fn log_directive(&self, configured: Option<&str>) -> String {
        if let Some(level) = self.log_level {
            LevelFilter::from(level).to_string().to_lowercase()
        } else if self.verbose {
            "debug".to_string()
        } else {
            configured.unwrap_or("warn").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan_with_format() {
        let cli = Cli::try_parse_from(["vellum", "scan", "a", "b", "--format", "json"]).unwrap();
        match cli.command {
            Commands::Scan { vaults, format } => {
                assert_eq!(vaults, vec![PathBuf::from("a"), PathBuf::from("b")]);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected scan"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = ["vellum", "index", "--strict", "-l", "trace", "-C", "c.toml"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Trace));
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert!(matches!(cli.command, Commands::Index { strict: true, .. }));
    }

    #[test]
    fn test_parse_requires_file() {
        assert!(Cli::try_parse_from(["vellum", "parse"]).is_err());
    }

    #[test]
    fn test_log_directive_precedence() {
        let cli = Cli::try_parse_from(["vellum", "-v", "-l", "error", "stats"]).unwrap();
        assert_eq!(cli.log_directive(Some("info")), "error");

        let cli = Cli::try_parse_from(["vellum", "-v", "stats"]).unwrap();
        assert_eq!(cli.log_directive(Some("info")), "debug");

        let cli = Cli::try_parse_from(["vellum", "stats"]).unwrap();
        assert_eq!(cli.log_directive(Some("vellum_scanner=trace")), "vellum_scanner=trace");
        assert_eq!(cli.log_directive(None), "warn");
    }
}
