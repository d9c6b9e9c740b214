//! YAML frontmatter splitting
//!
//! A note has frontmatter only when its first line is `---` and a later line
//! is `---` or `...`. Anything else is treated as a note without
//! frontmatter, including an opening delimiter that is never closed.
//! Well-formed YAML that is not a mapping contributes no metadata.

use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;
use vellum_core::Metadata;

const OPENING_DELIMITER: &str = "---";
const CLOSING_DELIMITERS: [&str; 2] = ["---", "..."];

/// Frontmatter block present but not valid YAML
#[derive(Debug, Error)]
pub enum FrontmatterError {
    /// YAML syntax error
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Split `source` into frontmatter metadata and body.
///
/// The body starts right after the closing delimiter line. A leading byte
/// order mark is skipped. An empty block, or one whose top level is not a
/// mapping, yields empty metadata.
pub fn split_frontmatter(source: &str) -> Result<(Metadata, &str), FrontmatterError> {
    let text = source.strip_prefix('\u{feff}').unwrap_or(source);

    let mut lines = text.split_inclusive('\n');
    let Some(first) = lines.next() else {
        return Ok((Metadata::new(), text));
    };
    if first.trim_end() != OPENING_DELIMITER {
        return Ok((Metadata::new(), text));
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if CLOSING_DELIMITERS.contains(&line.trim_end()) {
            let metadata = parse_yaml(&text[yaml_start..offset])?;
            return Ok((metadata, &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    Ok((Metadata::new(), text))
}

fn parse_yaml(yaml: &str) -> Result<Metadata, FrontmatterError> {
    if yaml.trim().is_empty() {
        return Ok(Metadata::new());
    }

    match serde_yaml::from_str::<Value>(yaml)? {
        value @ Value::Mapping(_) => Ok(serde_yaml::from_value(value)?),
        Value::Null => Ok(Metadata::new()),
        other => {
            debug!(kind = value_kind(&other), "Ignoring frontmatter that is not a mapping");
            Ok(Metadata::new())
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vellum_core::MetadataValue;

    #[test]
    fn test_basic_split() {
        let source = "---\ntitle: Note\ntags: [a, b]\n---\n# Body\n";
        let (meta, body) = split_frontmatter(source).unwrap();
        assert_eq!(meta.title().as_deref(), Some("Note"));
        assert_eq!(meta.get("tags"), Some(&MetadataValue::from(vec!["a", "b"])));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_no_frontmatter() {
        let source = "# Just a note\n---\nnot: frontmatter\n";
        let (meta, body) = split_frontmatter(source).unwrap();
        assert!(meta.is_empty());
        assert_eq!(body, source);
    }

    #[test]
    fn test_unclosed_frontmatter_is_body() {
        let source = "---\ntitle: Never closed\n";
        let (meta, body) = split_frontmatter(source).unwrap();
        assert!(meta.is_empty());
        assert_eq!(body, source);
    }

    #[test]
    fn test_empty_block() {
        let (meta, body) = split_frontmatter("---\n---\nbody").unwrap();
        assert!(meta.is_empty());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_comment_only_block() {
        let (meta, body) = split_frontmatter("---\n# nothing here\n---\nbody").unwrap();
        assert!(meta.is_empty());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_dots_close_block() {
        let (meta, body) = split_frontmatter("---\na: 1\n...\nrest").unwrap();
        assert_eq!(meta.get("a"), Some(&MetadataValue::Integer(1)));
        assert_eq!(body, "rest");
    }

    #[test]
    fn test_crlf_and_bom() {
        let source = "\u{feff}---\r\ntitle: Win\r\n---\r\nbody\r\n";
        let (meta, body) = split_frontmatter(source).unwrap();
        assert_eq!(meta.title().as_deref(), Some("Win"));
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn test_closing_at_end_of_file() {
        let (meta, body) = split_frontmatter("---\na: b\n---").unwrap();
        assert_eq!(meta.len(), 1);
        assert_eq!(body, "");
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let err = split_frontmatter("---\ntitle: [unclosed\n---\nbody").unwrap_err();
        assert!(matches!(err, FrontmatterError::Yaml(_)));
    }

    #[test]
    fn test_non_mapping_yields_empty_metadata() {
        let (meta, body) = split_frontmatter("---\n- a\n- b\n---\nbody").unwrap();
        assert!(meta.is_empty());
        assert_eq!(body, "body");

        let (meta, body) = split_frontmatter("---\njust a line\n---\n# Body").unwrap();
        assert!(meta.is_empty());
        assert_eq!(body, "# Body");

        let (meta, _) = split_frontmatter("---\n42\n---\n").unwrap();
        assert!(meta.is_empty());
    }
}
