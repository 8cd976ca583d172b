//! Index arena for the forest under construction
//!
//! Nodes are stored once and referred to by [`NodeId`]. Parent links are
//! recorded as child-id lists, so the resolver can keep plain ids on its
//! stacks instead of references into a tree that is still growing. The owned
//! [`Outline`] is assembled only when the pass is done.

use crate::ast::{Node, NodeKind, Outline};
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Slot {
    node: Option<Node>,
    children: Vec<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct Arena {
    slots: Vec<Slot>,
    roots: Vec<NodeId>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node without attaching it anywhere yet.
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            node: Some(node),
            children: Vec::new(),
        });
        id
    }

    /// Append `id` as the last child of `parent`, or as the last root.
    ///
    /// A parent that cannot own children (a note) is refused and the node
    /// becomes a root instead.
    pub fn attach(&mut self, id: NodeId, parent: Option<NodeId>) {
        match parent {
            Some(parent) if self.kind(parent).is_some_and(|k| k.is_container()) => {
                self.slots[parent.0].children.push(id);
            }
            Some(parent) => {
                warn!("refusing to attach node {} under non-container {}", id.0, parent.0);
                self.roots.push(id);
            }
            None => self.roots.push(id),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0).and_then(|slot| slot.node.as_ref())
    }

    pub fn kind(&self, id: NodeId) -> Option<NodeKind> {
        self.get(id).map(Node::kind)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        match self.slots.get(id.0) {
            Some(slot) => &slot.children,
            None => &[],
        }
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Total number of stored nodes
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Build the owned forest, leaving the arena untouched.
    pub fn to_outline(&self) -> Outline {
        self.clone().into_outline()
    }

    /// Move every node into its parent and return the forest.
    pub fn into_outline(mut self) -> Outline {
        let roots = std::mem::take(&mut self.roots);
        let nodes = roots
            .into_iter()
            .filter_map(|id| assemble(&mut self.slots, id))
            .collect();
        Outline::with_roots(nodes)
    }
}

/// Move the subtree under `root` out of the slots.
///
/// Works off an explicit stack, so outline depth is bounded by memory rather
/// than the call stack. Dropping or cloning the resulting `Node` tree still
/// recurses once per level.
fn assemble(slots: &mut [Slot], root: NodeId) -> Option<Node> {
    let mut open = vec![take_slot(slots, root)?];

    loop {
        let next = open.last_mut()?.pending.next();
        match next {
            Some(child) => {
                if let Some(frame) = take_slot(slots, child) {
                    open.push(frame);
                }
            }
            None => {
                let done = open.pop()?;
                match open.last_mut() {
                    Some(parent) => {
                        if parent.node.push_child(done.node).is_err() {
                            warn!("dropped child of non-container node {}", parent.id.0);
                        }
                    }
                    None => return Some(done.node),
                }
            }
        }
    }
}

struct Frame {
    id: NodeId,
    node: Node,
    pending: std::vec::IntoIter<NodeId>,
}

fn take_slot(slots: &mut [Slot], id: NodeId) -> Option<Frame> {
    let slot = slots.get_mut(id.0)?;
    let node = slot.node.take()?;
    Some(Frame {
        id,
        node,
        pending: std::mem::take(&mut slot.children).into_iter(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Indent;

    fn node(kind: NodeKind, text: &str) -> Node {
        Node::new(kind, Indent::default(), text, vec![])
    }

    #[test]
    fn test_assembles_nested_forest() {
        let mut arena = Arena::new();
        let project = arena.alloc(node(NodeKind::Project, "P"));
        arena.attach(project, None);
        let task = arena.alloc(node(NodeKind::Task, "T"));
        arena.attach(task, Some(project));
        let note = arena.alloc(node(NodeKind::Note, "N"));
        arena.attach(note, Some(task));

        assert_eq!(arena.len(), 3);
        assert_eq!(arena.roots(), &[project]);
        assert_eq!(arena.children(project), &[task]);

        let outline = arena.into_outline();
        assert_eq!(outline.len(), 1);
        let p = &outline.roots[0];
        assert_eq!(p.text(), "P");
        assert_eq!(p.children()[0].text(), "T");
        assert_eq!(p.children()[0].children()[0].text(), "N");
    }

    #[test]
    fn test_note_parent_is_refused() {
        let mut arena = Arena::new();
        let note = arena.alloc(node(NodeKind::Note, "N"));
        arena.attach(note, None);
        let task = arena.alloc(node(NodeKind::Task, "T"));
        arena.attach(task, Some(note));

        assert_eq!(arena.roots(), &[note, task]);
        assert!(arena.children(note).is_empty());
    }

    #[test]
    fn test_assembles_deep_chain_in_order() {
        let depth = 1_000;
        let mut arena = Arena::new();
        let mut parent = None;
        for i in 0..depth {
            let id = arena.alloc(node(NodeKind::Project, &i.to_string()));
            arena.attach(id, parent);
            parent = Some(id);
        }
        let leaf = arena.alloc(node(NodeKind::Note, "leaf"));
        arena.attach(leaf, parent);

        let outline = arena.into_outline();
        let walked: Vec<_> = outline.walk().map(|(d, n)| (d, n.text().to_string())).collect();
        assert_eq!(walked.len(), depth + 1);
        assert_eq!(walked[0], (0, "0".to_string()));
        assert_eq!(walked[depth - 1], (depth - 1, (depth - 1).to_string()));
        assert_eq!(walked[depth], (depth, "leaf".to_string()));
    }

    #[test]
    fn test_siblings_keep_attachment_order() {
        let mut arena = Arena::new();
        let project = arena.alloc(node(NodeKind::Project, "P"));
        arena.attach(project, None);
        for text in ["a", "b", "c"] {
            let id = arena.alloc(node(NodeKind::Task, text));
            arena.attach(id, Some(project));
        }

        let outline = arena.into_outline();
        let texts: Vec<_> = outline.roots[0].children().iter().map(Node::text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_to_outline_preserves_arena() {
        let mut arena = Arena::new();
        let id = arena.alloc(node(NodeKind::Task, "T"));
        arena.attach(id, None);

        let first = arena.to_outline();
        let second = arena.to_outline();
        assert_eq!(first, second);
        assert_eq!(arena.get(id).map(Node::text), Some("T"));
    }
}
