//! Tag extraction
//!
//! Merges tags declared in frontmatter with inline `#tag` and
//! `#parent/child` occurrences. Case is preserved and nested tags are kept
//! as one string.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use vellum_core::{Metadata, TagsField};

static INLINE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+(?:/\w+)*)").expect("inline tag regex"));

/// Extract the sorted, deduplicated tag list for a note.
///
/// Frontmatter `tags` may be a list (scalar elements used verbatim) or a
/// comma separated string (every piece trimmed, empty ones included). Any other
/// type contributes nothing. Inline tags are scanned over the whole body,
/// code and URLs included.
pub fn extract_tags(body: &str, metadata: &Metadata) -> Vec<String> {
    let mut tags: BTreeSet<String> = frontmatter_tags(metadata).collect();

    tags.extend(
        INLINE_TAG_REGEX
            .captures_iter(body)
            .filter_map(|cap| cap.get(1))
            .map(|m| m.as_str().to_string()),
    );

    tags.into_iter().collect()
}

fn frontmatter_tags(metadata: &Metadata) -> Box<dyn Iterator<Item = String> + '_> {
    match metadata.tags() {
        Some(TagsField::List(items)) => Box::new(items.iter().filter_map(|v| v.as_scalar_string())),
        Some(TagsField::Text(text)) => {
            Box::new(text.split(',').map(|piece| piece.trim().to_string()))
        }
        None => Box::new(std::iter::empty()),
    }
}
