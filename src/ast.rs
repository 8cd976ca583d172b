//! Data model for parsed outlines
//!
//! An outline is a forest of typed nodes. Projects and tasks own an ordered,
//! append-only list of children; notes are leaves. Tags are metadata carried by
//! the text-bearing node they were found on, not tree nodes of their own.
//!
//! The indentation of every node is stored in canonical form (see [`Indent`]),
//! which is also what the nesting resolver compares by default.

pub mod elements;
pub mod indent;
pub mod outline;

pub use elements::{Node, NodeKind, Note, Project, Tag, Task};
pub use indent::{Indent, IndentLevel};
pub use outline::{Outline, Walk};
