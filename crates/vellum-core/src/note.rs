//! Note input and output records

use crate::metadata::Metadata;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A note after its frontmatter has been split off, before extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNote {
    /// Source path of the note
    pub path: PathBuf,
    /// Body text with frontmatter removed
    pub body: String,
    /// Deserialized frontmatter (empty when the note had none)
    pub metadata: Metadata,
}

impl RawNote {
    /// Create a raw note
    pub fn new(path: impl Into<PathBuf>, body: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
            metadata,
        }
    }

    /// File name without its extension, or "" when the path has none
    pub fn filename_stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }

    /// File name including extension, or "" when the path has none
    pub fn filename(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

/// Normalized note produced by the parser and handed to indexers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Source path of the note
    pub path: PathBuf,
    /// File name including extension
    pub filename: String,
    /// Original body text
    pub content: String,
    /// Body with vault-specific syntax rewritten to portable markdown
    pub parsed_content: String,
    /// Frontmatter as read
    pub metadata: Metadata,
    /// Raw targets of wikilinks and embeds
    pub internal_links: BTreeSet<String>,
    /// Frontmatter and inline tags, sorted and deduplicated
    pub tags: Vec<String>,
    /// Display title
    pub title: String,
}

impl NoteRecord {
    /// Source path as a `Path`
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the note links to `target` (exact match)
    pub fn links_to(&self, target: &str) -> bool {
        self.internal_links.contains(target)
    }

    /// Check whether the note carries `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.binary_search_by(|t| t.as_str().cmp(tag)).is_ok()
    }
}
