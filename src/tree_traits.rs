use termtree::Tree;
use tracing::instrument;

use crate::arena::{NodeArena, NodeId};
use crate::errors::NodeResult;
use crate::hooks::NodeHooks;

/// Conversion into a `termtree` tree for box-drawing display.
pub trait TreeNodeConvert {
    fn to_tree_string(&self, node: NodeId) -> NodeResult<Tree<String>>;
}

impl<H: NodeHooks> TreeNodeConvert for NodeArena<H> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, node: NodeId) -> NodeResult<Tree<String>> {
        fn build_tree<H: NodeHooks>(arena: &NodeArena<H>, node_id: NodeId, parent_tree: &mut Tree<String>) -> NodeResult<()> {
            for &child_id in arena.children(node_id)? {
                let mut child_tree = Tree::new(arena.name(child_id)?.to_string());
                build_tree(arena, child_id, &mut child_tree)?;
                parent_tree.push(child_tree);
            }
            Ok(())
        }

        let mut tree = Tree::new(self.name(node)?.to_string());
        build_tree(self, node, &mut tree)?;
        Ok(tree)
    }
}
