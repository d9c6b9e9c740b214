//! Note parsing orchestrator
//!
//! `NoteParser` runs the rewriter and the three extractors over a note's
//! original body and assembles a `NoteRecord`. Parsing a `RawNote` cannot
//! fail; only the frontmatter split in `parse_source` can.

use crate::frontmatter::split_frontmatter;
use crate::links::extract_links;
use crate::rewrite::SyntaxRewriter;
use crate::tags::extract_tags;
use crate::title::resolve_title;
use std::path::Path;
use tracing::trace;
use vellum_core::{NoteRecord, ParseError, ParserResult, RawNote};

/// Builds `NoteRecord`s from notes.
///
/// Stateless apart from its rewrite chain, so one instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct NoteParser {
    rewriter: SyntaxRewriter,
}

impl NoteParser {
    /// Parser with the default rewrite chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with a custom rewrite chain
    pub fn with_rewriter(rewriter: SyntaxRewriter) -> Self {
        Self { rewriter }
    }

    /// The rewrite chain in use
    pub fn rewriter(&self) -> &SyntaxRewriter {
        &self.rewriter
    }

    /// Parse a note whose frontmatter has already been split off
    pub fn parse(&self, raw: &RawNote) -> NoteRecord {
        let body = raw.body.as_str();

        let parsed_content = self.rewriter.rewrite(body);
        let internal_links = extract_links(body);
        let tags = extract_tags(body, &raw.metadata);
        let title = resolve_title(body, &raw.metadata, raw.filename_stem());

        trace!(
            path = %raw.path.display(),
            links = internal_links.len(),
            tags = tags.len(),
            "Parsed note"
        );

        NoteRecord {
            path: raw.path.clone(),
            filename: raw.filename().to_string(),
            content: raw.body.clone(),
            parsed_content,
            metadata: raw.metadata.clone(),
            internal_links,
            tags,
            title,
        }
    }

    /// Split frontmatter off `source` and parse the result.
    ///
    /// A malformed frontmatter block fails the whole note; no partial record
    /// is returned.
    pub fn parse_source(&self, path: impl AsRef<Path>, source: &str) -> ParserResult<NoteRecord> {
        let raw = load_raw_note(path, source)?;
        Ok(self.parse(&raw))
    }

    /// Decode `bytes` as UTF-8, then behave like `parse_source`
    pub fn parse_bytes(&self, path: impl AsRef<Path>, bytes: &[u8]) -> ParserResult<NoteRecord> {
        let path = path.as_ref();
        let source = std::str::from_utf8(bytes).map_err(|_| ParseError::Encoding {
            path: path.to_path_buf(),
        })?;
        self.parse_source(path, source)
    }
}

/// Build a `RawNote` from the full text of a note file
pub fn load_raw_note(path: impl AsRef<Path>, source: &str) -> ParserResult<RawNote> {
    let path = path.as_ref();
    let (metadata, body) =
        split_frontmatter(source).map_err(|e| ParseError::frontmatter(path, e.to_string()))?;
    Ok(RawNote::new(path, body, metadata))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::RewriteRule;
    use vellum_core::Metadata;

    #[test]
    fn test_parse_assembles_record() {
        let metadata: Metadata = [("tags", "x, y")].into_iter().collect();
        let raw = RawNote::new(
            "vault/my-note.md",
            "# Heading\nSee [[Foo]] and ==this==. #a",
            metadata.clone(),
        );

        let record = NoteParser::new().parse(&raw);

        assert_eq!(record.path, Path::new("vault/my-note.md"));
        assert_eq!(record.filename, "my-note.md");
        assert_eq!(record.content, raw.body);
        assert_eq!(
            record.parsed_content,
            "# Heading\nSee [Foo](Foo) and **this**. #a"
        );
        assert_eq!(record.metadata, metadata);
        assert!(record.links_to("Foo"));
        assert_eq!(record.tags, vec!["a", "x", "y"]);
        assert_eq!(record.title, "Heading");
    }

    #[test]
    fn test_parse_does_not_mutate_input() {
        let raw = RawNote::new("n.md", "[[A]] ^id", Metadata::new());
        let before = raw.clone();
        let _ = NoteParser::new().parse(&raw);
        assert_eq!(raw, before);
    }

    #[test]
    fn test_extractors_see_original_body() {
        // With no rewrite rules the parsed content equals the body, and links
        // are still extracted from the original text either way.
        let parser = NoteParser::with_rewriter(SyntaxRewriter::with_rules(Vec::new()));
        let raw = RawNote::new("n.md", "[[A|B]]", Metadata::new());
        let record = parser.parse(&raw);
        assert_eq!(record.parsed_content, "[[A|B]]");
        assert!(record.links_to("A"));

        let record = NoteParser::new().parse(&raw);
        assert_eq!(record.parsed_content, "[B](A)");
        assert!(record.links_to("A"));
    }

    #[test]
    fn test_parse_source_splits_frontmatter() {
        let source = "---\ntitle: From Frontmatter\ntags:\n  - one\n---\n# Heading\nbody #two";
        let record = NoteParser::new().parse_source("notes/x.md", source).unwrap();

        assert_eq!(record.title, "From Frontmatter");
        assert_eq!(record.content, "# Heading\nbody #two");
        assert_eq!(record.tags, vec!["one", "two"]);
    }

    #[test]
    fn test_parse_source_propagates_frontmatter_error() {
        let err = NoteParser::new()
            .parse_source("bad.md", "---\ntitle: [unclosed\n---\nbody")
            .unwrap_err();
        assert!(matches!(err, ParseError::Frontmatter { .. }));
        assert!(err.to_string().contains("bad.md"));
    }

    #[test]
    fn test_parse_bytes_rejects_invalid_utf8() {
        let err = NoteParser::new()
            .parse_bytes("bin.md", &[0xff, 0xfe, 0x00])
            .unwrap_err();
        assert!(matches!(err, ParseError::Encoding { .. }));
    }

    #[test]
    fn test_filename_fallback_title() {
        let record = NoteParser::new().parse(&RawNote::new(
            "vault/project_kick-off.md",
            "no heading",
            Metadata::new(),
        ));
        assert_eq!(record.title, "project kick off");
    }

    #[test]
    fn test_default_chain() {
        assert_eq!(NoteParser::new().rewriter().rules(), &RewriteRule::ORDERED);
    }
}
