//! Descendant walks yielding each node with its path from the walk root.

use tracing::instrument;

use crate::arena::{NodeArena, NodeId};
use crate::errors::NodeResult;
use crate::hooks::NodeHooks;

/// One walk step: `node` and its ancestors from the walk root down to,
/// but excluding, `node`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkStep {
    pub path: Vec<NodeId>,
    pub node: NodeId,
}

impl WalkStep {
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

fn ordered(children: &[NodeId], inverse: bool) -> Vec<NodeId> {
    if inverse {
        children.iter().rev().copied().collect()
    } else {
        children.to_vec()
    }
}

/// Lazy pre-order walk over the descendants of a node.
pub struct TreeWalk<'a, H: NodeHooks> {
    arena: &'a NodeArena<H>,
    stack: Vec<WalkStep>,
    inverse: bool,
}

impl<'a, H: NodeHooks> TreeWalk<'a, H> {
    fn new(arena: &'a NodeArena<H>, root: NodeId, inverse: bool) -> NodeResult<Self> {
        let mut walk = Self {
            arena,
            stack: Vec::new(),
            inverse,
        };
        walk.push_children(&[], root)?;
        Ok(walk)
    }

    fn push_children(&mut self, path: &[NodeId], node: NodeId) -> NodeResult<()> {
        let children = ordered(&self.arena.node(node)?.children, self.inverse);
        let mut child_path = path.to_vec();
        child_path.push(node);
        // Reverse so the first child in walk order is popped first
        for &child in children.iter().rev() {
            self.stack.push(WalkStep {
                path: child_path.clone(),
                node: child,
            });
        }
        Ok(())
    }
}

impl<'a, H: NodeHooks> Iterator for TreeWalk<'a, H> {
    type Item = WalkStep;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.stack.pop()?;
        // The arena is borrowed for the whole walk, so queued nodes stay live
        let pushed = self.push_children(&step.path, step.node);
        debug_assert!(pushed.is_ok(), "walked node {} left the arena", step.node);
        Some(step)
    }
}

impl<H: NodeHooks> NodeArena<H> {
    /// Lazy form of [`walk_tree`](Self::walk_tree).
    pub fn iter_tree(&self, node: NodeId, inverse: bool) -> NodeResult<TreeWalk<'_, H>> {
        TreeWalk::new(self, node, inverse)
    }

    /// Depth-first pre-order walk: each child is followed by its own subtree.
    ///
    /// ```text
    /// root -> [A -> [A1, A2], B]
    /// ([root], A), ([root, A], A1), ([root, A], A2), ([root], B)
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn walk_tree(&self, node: NodeId, inverse: bool) -> NodeResult<Vec<WalkStep>> {
        Ok(self.iter_tree(node, inverse)?.collect())
    }

    /// All direct children first, then the tree walk of each child.
    ///
    /// ```text
    /// root -> [A -> [A1, A2], B]
    /// ([root], A), ([root], B), ([root, A], A1), ([root, A], A2)
    /// ```
    #[instrument(level = "trace", skip(self))]
    pub fn walk_base(&self, node: NodeId, inverse: bool) -> NodeResult<Vec<WalkStep>> {
        let children = ordered(&self.node(node)?.children, inverse);
        let mut walk: Vec<WalkStep> = children
            .iter()
            .map(|&child| WalkStep {
                path: vec![node],
                node: child,
            })
            .collect();

        for &child in &children {
            for mut step in self.iter_tree(child, inverse)? {
                step.path.insert(0, node);
                walk.push(step);
            }
        }
        Ok(walk)
    }
}
