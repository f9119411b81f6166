use tracing::{debug, instrument};

use crate::arena::{NodeArena, NodeId};
use crate::errors::NodeResult;
use crate::hooks::NodeHooks;

impl<H: NodeHooks> NodeArena<H> {
    /// Tears down `node` and its whole subtree.
    ///
    /// Children are freed before their parent, in child order. Each node runs
    /// the `pre_free` hook, detaches from its parent (firing the detach hooks)
    /// and leaves the arena. All handles of the subtree are stale afterwards.
    #[instrument(level = "debug", skip(self))]
    pub fn free(&mut self, node: NodeId) -> NodeResult<()> {
        let order = self.post_order(node)?;
        debug!("freeing {} nodes below and including {}", order.len(), node);

        for id in order {
            self.hooks.pre_free(id);
            if let Some(parent) = self.node(id)?.parent {
                self.remove_child(parent, id)?;
            }
            self.remove_from_arena(id);
        }
        Ok(())
    }

    /// Snapshot of the subtree of `node`, children before parents.
    fn post_order(&self, node: NodeId) -> NodeResult<Vec<NodeId>> {
        let mut order = Vec::new();
        let mut stack = vec![(node, false)];

        while let Some((current, visited)) = stack.pop() {
            if visited {
                order.push(current);
                continue;
            }
            stack.push((current, true));
            for &child in self.node(current)?.children.iter().rev() {
                stack.push((child, false));
            }
        }
        Ok(order)
    }
}
