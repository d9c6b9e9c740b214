//! Obsidian syntax rewriting
//!
//! Converts vault-only markup into portable markdown with an ordered chain
//! of named rules:
//! 1. `display-link`: `[[Target|Display]]` -> `[Display](Target)`
//! 2. `wikilink`: `[[Target]]` -> `[Target](Target)`
//! 3. `block-reference`: `^block-id`s at the end of a line are removed
//! 4. `highlight`: `==text==` -> `**text**`
//! 5. `embed`: `![[Target]]` -> `[Embedded: Target](Target)`
//!
//! The link rules skip spans prefixed with `!` so embeds reach rule 5 intact.
//! The display rule splits on the first pipe: `[[A|B|C]]` becomes `[B|C](A)`.
//! Rewriting is purely textual and does not know about code fences.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static DISPLAY_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[\[([^\]|]+)\|([^\]]+)\]\]").expect("display link regex")
});

static WIKILINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(!?)\[\[([^\]]+)\]\]").expect("wikilink regex"));

static BLOCK_REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| {
        Regex::new(r"(?mR)(?:[ \t]*\^[\w-]+)+[ \t]*$").expect("block reference regex")
    });

static HIGHLIGHT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"==([^=]+)==").expect("highlight regex"));

static EMBED_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[\[([^\]]+)\]\]").expect("embed regex"));

/// One step of the rewrite chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RewriteRule {
    /// `[[Target|Display]]`
    DisplayLink,
    /// `[[Target]]`
    Wikilink,
    /// trailing `^block-id`
    BlockReference,
    /// `==text==`
    Highlight,
    /// `![[Target]]`
    Embed,
}

impl RewriteRule {
    /// The default chain, in application order
    pub const ORDERED: [RewriteRule; 5] = [
        RewriteRule::DisplayLink,
        RewriteRule::Wikilink,
        RewriteRule::BlockReference,
        RewriteRule::Highlight,
        RewriteRule::Embed,
    ];

    /// Stable rule name
    pub fn name(&self) -> &'static str {
        match self {
            Self::DisplayLink => "display-link",
            Self::Wikilink => "wikilink",
            Self::BlockReference => "block-reference",
            Self::Highlight => "highlight",
            Self::Embed => "embed",
        }
    }

    /// Human readable summary of the transformation
    pub fn description(&self) -> &'static str {
        match self {
            Self::DisplayLink => "[[Target|Display]] -> [Display](Target)",
            Self::Wikilink => "[[Target]] -> [Target](Target)",
            Self::BlockReference => "removes ^block-id at the end of a line",
            Self::Highlight => "==text== -> **text**",
            Self::Embed => "![[Target]] -> [Embedded: Target](Target)",
        }
    }

    /// Apply this rule to `text`.
    ///
    /// Borrows the input unchanged when nothing matches.
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::DisplayLink => DISPLAY_LINK_REGEX.replace_all(text, |caps: &Captures<'_>| {
                if is_embed(caps) {
                    caps[0].to_string()
                } else {
                    format!("[{}]({})", &caps[3], &caps[2])
                }
            }),
            Self::Wikilink => WIKILINK_REGEX.replace_all(text, |caps: &Captures<'_>| {
                if is_embed(caps) {
                    caps[0].to_string()
                } else {
                    format!("[{}]({})", &caps[2], &caps[2])
                }
            }),
            Self::BlockReference => BLOCK_REFERENCE_REGEX.replace_all(text, ""),
            Self::Highlight => HIGHLIGHT_REGEX.replace_all(text, "**${1}**"),
            Self::Embed => EMBED_REGEX.replace_all(text, "[Embedded: ${1}](${1})"),
        }
    }
}

fn is_embed(caps: &Captures<'_>) -> bool {
    caps.get(1).is_some_and(|m| !m.as_str().is_empty())
}

/// Ordered rewrite rule chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxRewriter {
    rules: Vec<RewriteRule>,
}

impl SyntaxRewriter {
    /// Rewriter with the full default chain
    pub fn new() -> Self {
        Self {
            rules: RewriteRule::ORDERED.to_vec(),
        }
    }

    /// Rewriter applying only `rules`, in the given order
    pub fn with_rules(rules: impl IntoIterator<Item = RewriteRule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Rules in application order
    pub fn rules(&self) -> &[RewriteRule] {
        &self.rules
    }

    /// Run every rule over `body` in order
    pub fn rewrite(&self, body: &str) -> String {
        let mut text = body.to_owned();
        for rule in &self.rules {
            let rewritten = match rule.apply(&text) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(rewritten) => rewritten,
            };
            text = rewritten;
        }
        text
    }
}

impl Default for SyntaxRewriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite `body` with the default rule chain
pub fn rewrite(body: &str) -> String {
    SyntaxRewriter::new().rewrite(body)
}
