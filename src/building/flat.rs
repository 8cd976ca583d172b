//! Flat resolution policy
//!
//! Ignores indentation entirely. Every project becomes a new root; every task
//! or note becomes a child of the most recent root, provided that root can
//! own children. With no such root (start of input, or the latest root is a
//! note) the line becomes a root itself.

use super::arena::NodeId;
use super::resolver::Resolver;
use crate::ast::{IndentLevel, NodeKind};
use log::debug;

#[derive(Debug, Default)]
pub struct FlatResolver {
    last_root: Option<(NodeId, NodeKind)>,
}

impl FlatResolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resolver for FlatResolver {
    fn name(&self) -> &str {
        "flat"
    }

    fn resolve(&mut self, _level: &IndentLevel, kind: NodeKind, node: NodeId) -> Option<NodeId> {
        let parent = match self.last_root {
            Some((root, root_kind)) if kind != NodeKind::Project && root_kind.is_container() => {
                Some(root)
            }
            _ => {
                self.last_root = Some((node, kind));
                None
            }
        };
        debug!("flat: {} -> parent {:?}", kind, parent.map(|id| id.index()));
        parent
    }

    fn reset(&mut self) {
        self.last_root = None;
    }
}
