//! Project element
//!
//! A project is introduced by a line whose text ends in a colon. It groups the
//! tasks, notes and nested projects that the resolver attaches to it.

use super::node::Node;
use super::tag::Tag;
use crate::ast::indent::Indent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub indent: Indent,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Project {
    pub fn new(indent: Indent, text: impl Into<String>, tags: Vec<Tag>) -> Self {
        Project {
            indent,
            text: text.into(),
            tags,
            children: Vec::new(),
        }
    }

    /// Append a child; children are never removed or reordered.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}
