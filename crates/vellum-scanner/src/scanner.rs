//! Vault discovery and note reading

use crate::error::{ScanError, ScanResult};
use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use vellum_config::ScannerConfig;
use vellum_core::{NoteRecord, ParseError};
use vellum_parser::NoteParser;
use walkdir::{DirEntry, WalkDir};

/// Notes read concurrently by `read_all`
const READ_CONCURRENCY: usize = 16;

/// A note file discovered in a vault
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultFile {
    /// Name of the vault directory
    pub vault_name: String,
    /// Canonical vault root
    pub vault_path: PathBuf,
    /// Full path of the file
    pub file_path: PathBuf,
    /// Path relative to the vault root
    pub relative_path: PathBuf,
    /// File name including extension
    pub filename: String,
    /// Size in bytes
    pub size: u64,
    /// Last modification time
    pub modified_time: DateTime<Utc>,
    /// Creation time, where the platform reports one
    pub created_time: Option<DateTime<Utc>>,
}

/// A note that could not be read or parsed
#[derive(Debug)]
pub struct NoteFailure {
    /// File that failed
    pub path: PathBuf,
    /// Why it failed
    pub error: ScanError,
}

/// Outcome of reading every note in the configured vaults
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successfully parsed notes, in discovery order
    pub notes: Vec<NoteRecord>,
    /// Notes that failed, in discovery order
    pub failures: Vec<NoteFailure>,
}

impl BatchReport {
    /// True when no note failed
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of notes attempted
    pub fn total(&self) -> usize {
        self.notes.len() + self.failures.len()
    }
}

/// Scans vault directories for notes and parses them
#[derive(Debug, Clone)]
pub struct VaultScanner {
    vault_paths: Vec<PathBuf>,
    config: ScannerConfig,
    parser: NoteParser,
}

impl VaultScanner {
    /// Validate `vault_paths` and build a scanner.
    ///
    /// `~` is expanded and paths are canonicalized. Paths that do not exist
    /// or are not directories are skipped with a warning; if none remain the
    /// scanner cannot be built.
    pub fn new<I, P>(vault_paths: I, config: ScannerConfig) -> ScanResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut valid = Vec::new();

        for vault_path in vault_paths {
            let requested = vault_path.as_ref();
            let expanded = expand_home(requested);

            let resolved = match std::fs::canonicalize(&expanded) {
                Ok(path) => path,
                Err(_) => {
                    warn!("Vault path does not exist: {}", requested.display());
                    continue;
                }
            };
            if !resolved.is_dir() {
                warn!("Vault path is not a directory: {}", requested.display());
                continue;
            }
            valid.push(resolved);
        }

        if valid.is_empty() {
            return Err(ScanError::NoValidVaults);
        }

        info!("Initialized vault scanner with {} vaults", valid.len());

        Ok(Self {
            vault_paths: valid,
            config,
            parser: NoteParser::new(),
        })
    }

    /// Replace the note parser
    pub fn with_parser(mut self, parser: NoteParser) -> Self {
        self.parser = parser;
        self
    }

    /// Validated vault roots
    pub fn vault_paths(&self) -> &[PathBuf] {
        &self.vault_paths
    }

    /// Traversal settings
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Discover note files in every vault
    pub fn scan(&self) -> Vec<VaultFile> {
        let files: Vec<VaultFile> = self
            .vault_paths
            .iter()
            .flat_map(|vault_path| self.scan_vault(vault_path))
            .collect();

        info!("Found {} markdown files across all vaults", files.len());
        files
    }

    /// Discover note files under a single vault root
    pub(crate) fn scan_vault(&self, vault_path: &Path) -> Vec<VaultFile> {
        let vault_name = vault_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!("Scanning vault: {} at {}", vault_name, vault_path.display());

        let walker = WalkDir::new(vault_path)
            .follow_links(self.config.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(entry));

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Error scanning directory {}: {}", vault_path.display(), e);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !self.config.is_supported_file(entry.path()) {
                continue;
            }

            match vault_file(&entry, vault_path, &vault_name) {
                Ok(file) => files.push(file),
                Err(e) => {
                    warn!("Could not get stats for file {}: {}", entry.path().display(), e);
                }
            }
        }

        files
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        let excluded = self.config.is_excluded_name(&name);
        if excluded && entry.file_type().is_dir() {
            debug!("Skipping directory: {}", entry.path().display());
        }
        excluded
    }

    /// Read and parse one note
    pub async fn read_note(&self, path: &Path) -> ScanResult<NoteRecord> {
        if let Some(max) = self.config.max_file_size_bytes {
            let size = tokio::fs::metadata(path)
                .await
                .map_err(|e| ParseError::io(path, e))?
                .len();
            if size > max {
                return Err(ParseError::FileTooLarge { size, max }.into());
            }
        }

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ParseError::io(path, e))?;

        Ok(self.parser.parse_bytes(path, &bytes)?)
    }

    /// Read and parse every discovered note.
    ///
    /// A failing note is logged and recorded in the report; it never stops
    /// the rest of the batch.
    pub async fn read_all(&self) -> BatchReport {
        let files = self.scan();

        let results: Vec<(PathBuf, ScanResult<NoteRecord>)> = stream::iter(files)
            .map(|file| async move {
                let result = self.read_note(&file.file_path).await;
                (file.file_path, result)
            })
            .buffered(READ_CONCURRENCY)
            .collect()
            .await;

        let mut report = BatchReport::default();
        for (path, result) in results {
            match result {
                Ok(note) => report.notes.push(note),
                Err(error) => {
                    warn!("Error parsing file {}: {}", path.display(), error);
                    report.failures.push(NoteFailure { path, error });
                }
            }
        }

        debug!(
            parsed = report.notes.len(),
            failed = report.failures.len(),
            "Finished reading vault notes"
        );
        report
    }
}

fn vault_file(entry: &DirEntry, vault_path: &Path, vault_name: &str) -> walkdir::Result<VaultFile> {
    let metadata = entry.metadata()?;
    let file_path = entry.path().to_path_buf();
    let relative_path = file_path
        .strip_prefix(vault_path)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| file_path.clone());

    Ok(VaultFile {
        vault_name: vault_name.to_string(),
        vault_path: vault_path.to_path_buf(),
        relative_path,
        filename: entry.file_name().to_string_lossy().into_owned(),
        size: metadata.len(),
        modified_time: metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_default(),
        created_time: metadata.created().ok().map(DateTime::<Utc>::from),
        file_path,
    })
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
