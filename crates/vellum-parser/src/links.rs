//! Internal link extraction
//!
//! Collects the raw targets of `[[Target]]`, `[[Target|Display]]` and
//! `![[Target]]`. Targets are kept exactly as written; they are not resolved
//! to files.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static SIMPLE_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]|]+)\]\]").expect("simple link regex"));

static DISPLAY_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]|]+)\|[^\]]+\]\]").expect("display link regex"));

static EMBED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[\[([^\]]+)\]\]").expect("embed regex"));

/// Extract the deduplicated set of link targets in `body`.
///
/// Each pattern scans the whole body independently; an embed and a plain
/// link to the same target collapse into one entry. Embed targets keep
/// everything between the brackets, pipes included.
pub fn extract_links(body: &str) -> BTreeSet<String> {
    [&*SIMPLE_LINK_REGEX, &*DISPLAY_LINK_REGEX, &*EMBED_REGEX]
        .into_iter()
        .flat_map(|re| re.captures_iter(body))
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
