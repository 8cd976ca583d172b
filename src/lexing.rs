//! Line Scanner
//!
//! Classifies one physical line into a structural kind and extracts its leading
//! whitespace, its text, and the tags embedded in that text. The scanner keeps
//! no state between lines.
//!
//! Pipeline position: raw line → [`scan_line`] → [`ScannedLine`] → node construction.
//!
//! # Line grammar
//!
//! Patterns are tried in this order and the first match wins:
//!
//! 1. task:    `<indent>- <text>`
//! 2. project: `<indent><text>:<trailing whitespace>`
//! 3. note:    `<indent><text>`
//!
//! `<text>` always starts with a non-whitespace character. Lines with no
//! non-whitespace content produce nothing.
//!
//! # Tag grammar
//!
//! The text of every classified line is re-scanned for `@name(arg)` and `@name`.
//! Tags are reported left to right and stay in the text.

pub mod line_classification;
pub mod lines;
pub mod tags;

pub use line_classification::{scan_line, ScannedLine};
pub use lines::{split_lines, strip_line_terminator};
pub use tags::scan_tags;
