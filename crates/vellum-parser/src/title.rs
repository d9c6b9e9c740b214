//! Title resolution
//!
//! Precedence: frontmatter `title`, then the first level-1 heading, then the
//! filename stem with `_` and `-` turned into spaces.

use regex::Regex;
use std::sync::LazyLock;
use vellum_core::Metadata;

static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(\S.*)$").expect("h1 regex"));

/// Resolve the display title of a note
pub fn resolve_title(body: &str, metadata: &Metadata, filename_stem: &str) -> String {
    if let Some(title) = metadata.title() {
        return title;
    }

    if let Some(heading) = first_h1(body) {
        return heading.to_string();
    }

    filename_stem.replace(['_', '-'], " ")
}

fn first_h1(body: &str) -> Option<&str> {
    H1_REGEX
        .captures(body)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
}
