//! The parsed forest

use super::elements::{Node, NodeKind};
use serde::{Deserialize, Serialize};

/// An ordered sequence of root nodes, each owning its subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub roots: Vec<Node>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roots(roots: Vec<Node>) -> Self {
        Outline { roots }
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Number of root nodes
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.roots.iter()
    }

    /// Depth-first, pre-order walk over every node with its depth (roots at 0).
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.roots.iter().rev().map(|node| (0, node)).collect(),
        }
    }

    /// Total number of nodes of the given kind anywhere in the forest
    pub fn count(&self, kind: NodeKind) -> usize {
        self.walk().filter(|(_, node)| node.kind() == kind).count()
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator returned by [`Outline::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.children().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
