//! Indentation canonicalization and nesting levels
//!
//! A line's leading whitespace is stored as the sorted, deduplicated set of the
//! whitespace characters it contains. Two lines that use the same characters,
//! in any order and any count, therefore carry the same [`Indent`].
//!
//! The resolver does not compare raw indents; it compares [`IndentLevel`]s,
//! which are derived from an indent according to the configured policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical indentation: the sorted set of whitespace characters of a line prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Indent(String);

impl Indent {
    /// Canonicalize a raw leading-whitespace string.
    pub fn canonical(raw: &str) -> Self {
        let mut chars: Vec<char> = raw.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        Indent(chars.into_iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct whitespace characters in the set
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '\t' => f.write_str("\\t")?,
                ' ' => f.write_str("\\s")?,
                other => write!(f, "{}", other.escape_unicode())?,
            }
        }
        Ok(())
    }
}

/// Ordinal nesting level used by the resolvers.
///
/// Levels order by `width` first and by `key` second, so any total order the
/// policies produce is consistent with "shallower sorts first".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndentLevel {
    width: usize,
    key: String,
}

impl IndentLevel {
    /// The level of an unindented line.
    pub fn root() -> Self {
        Self::default()
    }

    /// Level keyed by the canonical character set.
    pub fn from_indent(indent: &Indent) -> Self {
        IndentLevel {
            width: indent.len(),
            key: indent.as_str().to_string(),
        }
    }

    /// Level keyed by the literal count of leading whitespace characters.
    pub fn from_width(raw: &str) -> Self {
        IndentLevel {
            width: raw.chars().count(),
            key: String::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
}

impl fmt::Display for IndentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "{}", self.width)
        } else {
            write!(f, "{}:{}", self.width, Indent(self.key.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_sorts_and_dedups() {
        assert_eq!(Indent::canonical(" \t \t").as_str(), "\t ");
        assert_eq!(Indent::canonical("\t\t\t"), Indent::canonical("\t"));
        assert_eq!(Indent::canonical(" \t"), Indent::canonical("\t   "));
    }

    #[test]
    fn test_empty_indent() {
        let indent = Indent::canonical("");
        assert!(indent.is_empty());
        assert_eq!(indent.len(), 0);
        assert_eq!(IndentLevel::from_indent(&indent), IndentLevel::root());
    }

    #[test]
    fn test_charset_levels_order_by_set_size() {
        let none = IndentLevel::from_indent(&Indent::canonical(""));
        let tab = IndentLevel::from_indent(&Indent::canonical("\t"));
        let space = IndentLevel::from_indent(&Indent::canonical("    "));
        let mixed = IndentLevel::from_indent(&Indent::canonical(" \t"));

        assert!(none < tab);
        assert!(none < space);
        assert!(tab < mixed);
        assert!(space < mixed);
        assert_ne!(tab, space);
    }

    #[test]
    fn test_width_levels_count_literal_characters() {
        assert_eq!(IndentLevel::from_width("\t\t").width(), 2);
        assert_eq!(IndentLevel::from_width("  "), IndentLevel::from_width("\t\t"));
        assert!(IndentLevel::from_width("\t") < IndentLevel::from_width("    "));
    }

    #[test]
    fn test_display_escapes_whitespace() {
        assert_eq!(Indent::canonical("\t ").to_string(), "\\t\\s");
        assert_eq!(IndentLevel::from_width("   ").to_string(), "3");
    }
}
