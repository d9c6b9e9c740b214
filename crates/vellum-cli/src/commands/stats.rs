use crate::cli::OutputFormat;
use anyhow::Result;
use std::path::PathBuf;
use vellum_config::VellumConfig;

pub fn execute(config: &VellumConfig, vaults: &[PathBuf], format: OutputFormat) -> Result<()> {
    let stats = super::scanner(config, vaults)?.stats();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Text => {
            println!("Vaults: {}", stats.total_vaults);
            for vault in &stats.vaults {
                let modified = vault
                    .last_modified
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{}\t{}\tfiles={}\tbytes={}\tlast_modified={}",
                    vault.name,
                    vault.path.display(),
                    vault.total_files,
                    vault.total_size,
                    modified
                );
            }
            println!(
                "Total: {} files, {} bytes",
                stats.total_files(),
                stats.total_size()
            );
        }
    }
    Ok(())
}
