//! The seam between line scanning and tree building
//!
//! A resolver sees every structural line in document order and decides which
//! earlier node, if any, becomes the parent of the new one. It never looks
//! ahead and never sees the tree itself, only ids it handed out earlier.

use super::arena::NodeId;
use super::flat::FlatResolver;
use super::nested::NestedResolver;
use crate::ast::{IndentLevel, NodeKind};
use crate::config::ResolveMode;

pub trait Resolver {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Pick the parent for `node`, or `None` to make it a root.
    fn resolve(&mut self, level: &IndentLevel, kind: NodeKind, node: NodeId) -> Option<NodeId>;

    /// Forget all open ancestors.
    fn reset(&mut self);
}

/// Create the resolver for a mode
pub fn resolver_for(mode: ResolveMode) -> Box<dyn Resolver> {
    match mode {
        ResolveMode::Nested => Box::new(NestedResolver::new()),
        ResolveMode::Flat => Box::new(FlatResolver::new()),
    }
}
