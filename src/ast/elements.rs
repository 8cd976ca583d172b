//! Outline elements
//!
//! One struct per node kind, tied together by the [`Node`] sum type.

pub mod node;
pub mod note;
pub mod project;
pub mod tag;
pub mod task;

pub use node::{Node, NodeKind};
pub use note::Note;
pub use project::Project;
pub use tag::Tag;
pub use task::Task;
