//! Parser error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a file into a `RawNote`.
///
/// The extraction steps themselves never fail; every variant here comes from
/// reading, decoding, or splitting frontmatter off the source text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// IO error reading file
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: io::Error,
    },

    /// File content is not valid UTF-8
    #[error("Invalid UTF-8 encoding in {}", .path.display())]
    Encoding {
        /// File with the bad encoding
        path: PathBuf,
    },

    /// Frontmatter block present but not valid YAML
    #[error("Frontmatter parse error in {}: {message}", .path.display())]
    Frontmatter {
        /// Note whose frontmatter failed
        path: PathBuf,
        /// Deserializer message
        message: String,
    },

    /// File exceeds size limit
    #[error("File too large: {size} bytes (max {max} bytes)")]
    FileTooLarge {
        /// Actual file size
        size: u64,
        /// Maximum allowed size
        max: u64,
    },
}

/// Specialized Result type for parser operations
pub type ParserResult<T> = Result<T, ParseError>;

impl ParseError {
    /// Create a frontmatter error
    pub fn frontmatter(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Frontmatter {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create an IO error for the given path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True when the file itself was readable and only its content was rejected
    pub fn is_content_error(&self) -> bool {
        matches!(self, Self::Frontmatter { .. } | Self::Encoding { .. })
    }
}
