//! Task element
//!
//! Same shape as a project; only the scan rule that produced it differs
//! (a leading `- ` marker).

use super::node::Node;
use super::tag::Tag;
use crate::ast::indent::Indent;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub indent: Indent,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Task {
    pub fn new(indent: Indent, text: impl Into<String>, tags: Vec<Tag>) -> Self {
        Task {
            indent,
            text: text.into(),
            tags,
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }
}
