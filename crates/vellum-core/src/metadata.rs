//! Frontmatter metadata
//!
//! Frontmatter is schemaless, so values are kept as a small variant type and
//! only the two fields the pipeline reads (`title`, `tags`) get typed
//! accessors. A field with an unexpected type is reported as absent; it
//! never fails the parse.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single untyped frontmatter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    /// `~`, `null`, or an empty value
    Null,
    /// `true` / `false`
    Bool(bool),
    /// Integer that fits in an i64
    Integer(i64),
    /// Any other number
    Float(f64),
    /// Plain scalar or quoted string
    String(String),
    /// Sequence of values
    List(Vec<MetadataValue>),
    /// Nested mapping
    Map(BTreeMap<String, MetadataValue>),
}

impl MetadataValue {
    /// Borrow the value as a string slice, if it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the value as a list, if it is a list
    pub fn as_list(&self) -> Option<&[MetadataValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Render a scalar (string, number, bool) as text.
    ///
    /// Null, lists and maps have no scalar form and return `None`.
    pub fn as_scalar_string(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Float(_) => Some(self.to_string()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Null | Self::List(_) | Self::Map(_) => None,
        }
    }

    /// True for `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            // Whole floats keep a trailing `.0` so `1.0` does not read as `1`
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for MetadataValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for MetadataValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for MetadataValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<MetadataValue>> From<Vec<T>> for MetadataValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

/// Shape of the `tags` frontmatter field when it has a usable type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TagsField<'a> {
    /// `tags: [a, b]` or a block sequence
    List(&'a [MetadataValue]),
    /// `tags: a, b`
    Text(&'a str),
}

/// Frontmatter key/value mapping.
///
/// Backed by a `BTreeMap` so iteration and serialization order are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, MetadataValue>);

impl Metadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a raw value
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.0.get(key)
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<MetadataValue>,
    ) -> Option<MetadataValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Check if a key exists (including keys with a null value)
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetadataValue)> {
        self.0.iter()
    }

    /// The `title` field rendered as text.
    ///
    /// Any non-null value counts as a title; a null value (`title:` with
    /// nothing after it) is treated as absent.
    pub fn title(&self) -> Option<String> {
        match self.get("title")? {
            MetadataValue::Null => None,
            value => Some(value.to_string()),
        }
    }

    /// The `tags` field, if it is a list or a string
    pub fn tags(&self) -> Option<TagsField<'_>> {
        match self.get("tags")? {
            MetadataValue::List(items) => Some(TagsField::List(items)),
            MetadataValue::String(s) => Some(TagsField::Text(s)),
            _ => None,
        }
    }
}

impl From<BTreeMap<String, MetadataValue>> for Metadata {
    fn from(map: BTreeMap<String, MetadataValue>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<MetadataValue>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
