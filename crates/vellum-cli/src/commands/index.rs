use anyhow::{bail, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use vellum_config::VellumConfig;

pub async fn execute(config: &VellumConfig, vaults: &[PathBuf], strict: bool) -> Result<()> {
    let report = super::scanner(config, vaults)?.read_all().await;

    let mut out = std::io::stdout().lock();
    for note in &report.notes {
        serde_json::to_writer(&mut out, note)?;
        writeln!(out)?;
    }
    out.flush()?;

    info!(
        "Indexed {} of {} notes ({} failed)",
        report.notes.len(),
        report.total(),
        report.failures.len()
    );

    if strict && !report.is_clean() {
        bail!(
            "{} of {} notes failed to parse",
            report.failures.len(),
            report.total()
        );
    }
    Ok(())
}
