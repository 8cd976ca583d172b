//! Indentation Resolver
//!
//! Reconstructs nesting from a flat stream of `(level, kind)` pairs.
//!
//! # State
//!
//! Two stacks of open ancestors, each ordered by strictly increasing level:
//! - `projects`: every project still in scope
//! - `tasks`: tasks open under the current project; a new project clears it
//!
//! Notes never become ancestors.
//!
//! # Logic
//!
//! For each incoming line, the insertion point in each stack is the first
//! entry whose level is at or deeper than the line's level.
//!
//! 1. Project: close every project at or deeper than the line, open this one,
//!    clear all tasks. Parent is the innermost remaining project.
//! 2. Task: close deeper projects (a project at exactly this level stays open),
//!    close every task at or deeper than the line, open this one.
//!    Parent is the innermost shallower task, else the innermost open project.
//! 3. Note: same as a task, except that a task at exactly this level stays
//!    open and the note itself is not opened.
//!
//! A line at an already-open level therefore replaces the previous holder of
//! that level as the innermost open ancestor at that depth.

use super::arena::NodeId;
use super::resolver::Resolver;
use crate::ast::{IndentLevel, NodeKind};
use log::debug;

type OpenStack = Vec<(IndentLevel, NodeId)>;

#[derive(Debug, Default)]
pub struct NestedResolver {
    projects: OpenStack,
    tasks: OpenStack,
}

impl NestedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open projects, shallowest first
    pub fn open_projects(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.projects.iter().map(|(_, id)| *id)
    }

    /// Open tasks of the current project, shallowest first
    pub fn open_tasks(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tasks.iter().map(|(_, id)| *id)
    }
}

/// Binary search for the first entry at or deeper than `level`.
/// Also reports whether that entry sits at exactly `level`.
fn insertion_point(stack: &OpenStack, level: &IndentLevel) -> (usize, bool) {
    let idx = stack.partition_point(|(open, _)| open < level);
    let exact = stack.get(idx).is_some_and(|(open, _)| open == level);
    (idx, exact)
}

fn innermost(stack: &OpenStack) -> Option<NodeId> {
    stack.last().map(|(_, id)| *id)
}

impl Resolver for NestedResolver {
    fn name(&self) -> &str {
        "nested"
    }

    fn resolve(&mut self, level: &IndentLevel, kind: NodeKind, node: NodeId) -> Option<NodeId> {
        let (pidx, p_exact) = insertion_point(&self.projects, level);
        let (tidx, t_exact) = insertion_point(&self.tasks, level);

        let parent = match kind {
            NodeKind::Project => {
                self.projects.truncate(pidx);
                let parent = innermost(&self.projects);
                self.projects.push((level.clone(), node));
                self.tasks.clear();
                parent
            }
            NodeKind::Task | NodeKind::Note => {
                self.projects.truncate(pidx + usize::from(p_exact));

                let parent_task = if kind == NodeKind::Task {
                    self.tasks.truncate(tidx);
                    let parent = innermost(&self.tasks);
                    self.tasks.push((level.clone(), node));
                    parent
                } else {
                    self.tasks.truncate(tidx + usize::from(t_exact));
                    self.tasks[..tidx].last().map(|(_, id)| *id)
                };

                parent_task.or_else(|| innermost(&self.projects))
            }
        };

        debug!(
            "nested: {} at level {} -> parent {:?} (open projects {}, open tasks {})",
            kind,
            level,
            parent.map(|id| id.index()),
            self.projects.len(),
            self.tasks.len()
        );
        parent
    }

    fn reset(&mut self) {
        self.projects.clear();
        self.tasks.clear();
    }
}
