//! Fluent assertion API for outline nodes

use crate::ast::{Node, NodeKind, Outline, Tag};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for an outline
pub fn assert_outline(outline: &Outline) -> OutlineAssertion<'_> {
    OutlineAssertion { outline }
}

fn summarize(nodes: &[Node]) -> String {
    nodes
        .iter()
        .map(|n| format!("{}({:?})", n.node_type(), n.text()))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Outline Assertions
// ============================================================================

pub struct OutlineAssertion<'a> {
    outline: &'a Outline,
}

impl<'a> OutlineAssertion<'a> {
    /// Assert the number of root nodes
    pub fn root_count(self, expected: usize) -> Self {
        let actual = self.outline.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} roots, found {} roots: [{}]",
            expected,
            actual,
            summarize(self.outline.roots())
        );
        self
    }

    /// Assert on a specific root by index
    pub fn root<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let roots = self.outline.roots();
        assert!(
            index < roots.len(),
            "Root index {} out of bounds (outline has {} roots)",
            index,
            roots.len()
        );
        assertion(NodeAssertion {
            node: &roots[index],
            context: format!("roots[{}]", index),
        });
        self
    }

    /// Assert the total number of nodes of a kind anywhere in the forest
    pub fn total(self, kind: NodeKind, expected: usize) -> Self {
        let actual = self.outline.count(kind);
        assert_eq!(actual, expected, "Expected {expected} {kind} nodes, found {actual}");
        self
    }
}

// ============================================================================
// Node Assertions
// ============================================================================

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    fn expect_kind(self, kind: NodeKind) -> TypedAssertion<'a> {
        assert_eq!(
            self.node.kind(),
            kind,
            "{}: Expected {}, found {} {:?}",
            self.context,
            kind,
            self.node.node_type(),
            self.node.text()
        );
        TypedAssertion {
            node: self.node,
            context: self.context,
        }
    }

    pub fn assert_project(self) -> TypedAssertion<'a> {
        self.expect_kind(NodeKind::Project)
    }

    pub fn assert_task(self) -> TypedAssertion<'a> {
        self.expect_kind(NodeKind::Task)
    }

    pub fn assert_note(self) -> TypedAssertion<'a> {
        self.expect_kind(NodeKind::Note)
    }
}

/// Assertions on a node whose kind has been checked
pub struct TypedAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> TypedAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.node.text(),
            expected,
            "{}: Expected text {:?}, found {:?}",
            self.context,
            expected,
            self.node.text()
        );
        self
    }

    pub fn indent(self, expected: &str) -> Self {
        assert_eq!(
            self.node.indent().as_str(),
            expected,
            "{}: Expected canonical indent {:?}, found {:?}",
            self.context,
            expected,
            self.node.indent().as_str()
        );
        self
    }

    pub fn tags(self, expected: &[Tag]) -> Self {
        assert_eq!(
            self.node.tags(),
            expected,
            "{}: Tag mismatch on {:?}",
            self.context,
            self.node.text()
        );
        self
    }

    pub fn no_tags(self) -> Self {
        self.tags(&[])
    }

    pub fn child_count(self, expected: usize) -> Self {
        let children = self.node.children();
        assert_eq!(
            children.len(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            children.len(),
            summarize(children)
        );
        self
    }

    pub fn no_children(self) -> Self {
        self.child_count(0)
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.node.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(NodeAssertion {
            node: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}
