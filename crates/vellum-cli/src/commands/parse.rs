use anyhow::{bail, Result};
use std::path::Path;
use vellum_config::VellumConfig;
use vellum_core::ParseError;
use vellum_parser::NoteParser;

pub async fn execute(config: &VellumConfig, file: &Path) -> Result<()> {
    if let Some(max) = config.scanner.max_file_size_bytes {
        let size = tokio::fs::metadata(file)
            .await
            .map_err(|e| ParseError::io(file, e))?
            .len();
        if size > max {
            bail!(ParseError::FileTooLarge { size, max });
        }
    }

    let bytes = tokio::fs::read(file)
        .await
        .map_err(|e| ParseError::io(file, e))?;

    let note = NoteParser::new().parse_bytes(file, &bytes)?;
    println!("{}", serde_json::to_string_pretty(&note)?);
    Ok(())
}
