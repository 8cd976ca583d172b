//! # taskpaper
//!
//! A parser for TaskPaper-style plain-text outlines.
//!
//! An outline is a sequence of lines, each one of:
//! - a project: text ending in a colon, `Groceries:`
//! - a task: text after a `- ` marker, `- Milk @due(today)`
//! - a note: anything else that is not blank
//!
//! Parsing runs in two stages. The [lexing] stage classifies each line on its
//! own and extracts its tags. The [building] stage resolves, line by line,
//! which earlier project or task is the parent of the new node, using only the
//! indentation seen so far.
//!
//! ```rust,ignore
//! use taskpaper::{parse_str, ParseConfig};
//!
//! let outline = parse_str("Groceries:\n\t- Milk\n\t- Eggs\n", &ParseConfig::default());
//! assert_eq!(outline.roots[0].children().len(), 2);
//! ```
//!
//! ## Testing
//!
//! Tree-shape assertions go through the [testing] module's fluent API.

pub mod ast;
pub mod building;
pub mod config;
pub mod formats;
pub mod lexing;
pub mod testing;

pub use ast::{Indent, Node, NodeKind, Note, Outline, Project, Tag, Task};
pub use building::{parse_str, read_outline, DecodeError, OutlineBuilder, ReadError};
pub use config::{ConfigRegistry, IndentPolicy, ParseConfig, ResolveMode};
pub use formats::{FormatError, FormatRegistry, Formatter};
