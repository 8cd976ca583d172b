//! Line Classification
//!
//! Core classification logic for determining the structural kind of a line.
//!
//! Classification follows this specific order (important for correctness):
//! 1. Task lines (leading `- ` marker)
//! 2. Project lines (ending with colon, ignoring trailing whitespace)
//! 3. Note lines (any other non-blank content)
//!
//! Task and project are mutually exclusive only through this ordering:
//! `- Call back:` is a task.

use super::lines::strip_line_terminator;
use super::tags::scan_tags;
use crate::ast::{Indent, NodeKind, Tag};
use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;

/// Line patterns in priority order. Each captures `indent` and `text`.
static LINE_PATTERNS: Lazy<Vec<(NodeKind, Regex)>> = Lazy::new(|| {
    vec![
        (
            NodeKind::Task,
            Regex::new(r"^(?P<indent>\s*)- (?P<text>\S.*)$").unwrap(),
        ),
        (
            NodeKind::Project,
            Regex::new(r"^(?P<indent>\s*)(?P<text>\S.*):\s*$").unwrap(),
        ),
        (
            NodeKind::Note,
            Regex::new(r"^(?P<indent>\s*)(?P<text>\S.*)$").unwrap(),
        ),
    ]
});

/// The scanner's record for one structural line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
    pub kind: NodeKind,
    /// Leading whitespace exactly as it appeared
    pub indent: String,
    /// Text after the marker; a project's trailing colon is excluded
    pub text: String,
    pub tags: Vec<Tag>,
}

impl ScannedLine {
    pub fn canonical_indent(&self) -> Indent {
        Indent::canonical(&self.indent)
    }
}

/// Classify a single line (with or without its terminator).
///
/// Returns `None` for blank lines. Never fails.
pub fn scan_line(line: &str) -> Option<ScannedLine> {
    let content = strip_line_terminator(line);

    for (kind, pattern) in LINE_PATTERNS.iter() {
        let Some(caps) = pattern.captures(content) else {
            continue;
        };
        let indent = caps.name("indent").map_or("", |m| m.as_str());
        let text = caps.name("text").map_or("", |m| m.as_str());
        trace!("scanned {} line {:?}", kind, text);

        return Some(ScannedLine {
            kind: *kind,
            indent: indent.to_string(),
            text: text.to_string(),
            tags: scan_tags(text),
        });
    }

    None
}
