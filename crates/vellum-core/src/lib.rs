//! Vellum Core
//!
//! Shared types for the vault ingestion pipeline:
//! - `Metadata` / `MetadataValue` - untyped frontmatter with typed accessors
//! - `RawNote` - a note body plus its frontmatter, as handed to the parser
//! - `NoteRecord` - the normalized output consumed by indexers
//! - `ParseError` - failures raised before a note reaches the parser
//!
//! The parser and scanner crates depend on these types; this crate depends
//! on neither.

pub mod error;
pub mod metadata;
pub mod note;

pub use error::{ParseError, ParserResult};
pub use metadata::{Metadata, MetadataValue, TagsField};
pub use note::{NoteRecord, RawNote};
