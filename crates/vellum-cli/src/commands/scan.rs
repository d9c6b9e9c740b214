use crate::cli::OutputFormat;
use anyhow::Result;
use std::path::PathBuf;
use vellum_config::VellumConfig;

pub fn execute(config: &VellumConfig, vaults: &[PathBuf], format: OutputFormat) -> Result<()> {
    let files = super::scanner(config, vaults)?.scan();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&files)?),
        OutputFormat::Text => {
            for file in &files {
                println!("{}\t{}", file.vault_name, file.relative_path.display());
            }
        }
    }
    Ok(())
}
