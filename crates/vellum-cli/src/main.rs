use anyhow::Result;
use clap::Parser;
use tracing::debug;

use vellum_cli::{
    cli::{Cli, Commands},
    commands, config, logging,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref())?;
    logging::init(&cli.log_directive(config.logging.level.as_deref()));
    debug!(vaults = config.vault.paths.len(), "Configuration loaded");

    match cli.command {
        Commands::Scan { vaults, format } => commands::scan::execute(&config, &vaults, format),
        Commands::Parse { file } => commands::parse::execute(&config, &file).await,
        Commands::Index { vaults, strict } => {
            commands::index::execute(&config, &vaults, strict).await
        }
        Commands::Stats { vaults, format } => commands::stats::execute(&config, &vaults, format),
    }
}
