//! Node sum type
//!
//! Every structural line of an outline becomes exactly one [`Node`]. Traversal
//! code matches on the variant instead of dispatching through a visitor.

use super::note::Note;
use super::project::Project;
use super::tag::Tag;
use super::task::Task;
use crate::ast::indent::Indent;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The structural kind of a line, and of the node built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Project,
    Task,
    Note,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Project => "project",
            NodeKind::Task => "task",
            NodeKind::Note => "note",
        }
    }

    /// Whether nodes of this kind may own children
    pub fn is_container(&self) -> bool {
        !matches!(self, NodeKind::Note)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Project(Project),
    Task(Task),
    Note(Note),
}

impl Node {
    /// Build the node for one classified line.
    pub fn new(kind: NodeKind, indent: Indent, text: impl Into<String>, tags: Vec<Tag>) -> Self {
        match kind {
            NodeKind::Project => Node::Project(Project::new(indent, text, tags)),
            NodeKind::Task => Node::Task(Task::new(indent, text, tags)),
            NodeKind::Note => Node::Note(Note::new(indent, text, tags)),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Project(_) => NodeKind::Project,
            Node::Task(_) => NodeKind::Task,
            Node::Note(_) => NodeKind::Note,
        }
    }

    pub fn node_type(&self) -> &'static str {
        self.kind().as_str()
    }

    pub fn is_project(&self) -> bool {
        matches!(self, Node::Project(_))
    }

    pub fn is_task(&self) -> bool {
        matches!(self, Node::Task(_))
    }

    pub fn is_note(&self) -> bool {
        matches!(self, Node::Note(_))
    }

    pub fn indent(&self) -> &Indent {
        match self {
            Node::Project(p) => &p.indent,
            Node::Task(t) => &t.indent,
            Node::Note(n) => &n.indent,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Node::Project(p) => &p.text,
            Node::Task(t) => &t.text,
            Node::Note(n) => &n.text,
        }
    }

    pub fn tags(&self) -> &[Tag] {
        match self {
            Node::Project(p) => &p.tags,
            Node::Task(t) => &t.tags,
            Node::Note(n) => &n.tags,
        }
    }

    /// Children in document order; always empty for notes.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Project(p) => p.children(),
            Node::Task(t) => t.children(),
            Node::Note(_) => &[],
        }
    }

    /// Append a child. A note cannot own children, so the child is handed back.
    pub fn push_child(&mut self, child: Node) -> Result<(), Node> {
        match self {
            Node::Project(p) => {
                p.push(child);
                Ok(())
            }
            Node::Task(t) => {
                t.push(child);
                Ok(())
            }
            Node::Note(_) => Err(child),
        }
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags().iter().any(|tag| tag.name == name)
    }

    /// Short human-readable label: the text followed by its tags
    pub fn display_label(&self) -> String {
        let tags = self.tags();
        if tags.is_empty() {
            return self.text().to_string();
        }
        let rendered: Vec<String> = tags.iter().map(Tag::to_string).collect();
        format!("{} [{}]", self.text(), rendered.join(", "))
    }
}
