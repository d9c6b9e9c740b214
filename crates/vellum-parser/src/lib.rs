//! Vellum Note Parser
//!
//! Turns Obsidian-flavored markdown into normalized note records:
//! - `rewrite` - wikilinks, embeds, highlights and block references to portable markdown
//! - `links` - referenced note titles
//! - `tags` - frontmatter and inline `#tags`
//! - `title` - frontmatter title, first H1, or filename
//! - `frontmatter` - YAML header splitting
//! - `note_parser` - the orchestrator callers use
//!
//! Every extractor is a total function: malformed syntax is left alone
//! rather than reported. Only frontmatter splitting can fail.

pub mod frontmatter;
pub mod links;
pub mod note_parser;
pub mod rewrite;
pub mod tags;
pub mod title;

pub use frontmatter::{split_frontmatter, FrontmatterError};
pub use links::extract_links;
pub use note_parser::{load_raw_note, NoteParser};
pub use rewrite::{rewrite, RewriteRule, SyntaxRewriter};
pub use tags::extract_tags;
pub use title::resolve_title;

pub use vellum_core::{Metadata, MetadataValue, NoteRecord, ParseError, ParserResult, RawNote};
