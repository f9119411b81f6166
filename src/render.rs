//! Debug string renderings of nodes, trees and paths.

use itertools::Itertools;

use crate::arena::{NodeArena, NodeId};
use crate::errors::NodeResult;
use crate::hooks::NodeHooks;

impl<H: NodeHooks> NodeArena<H> {
    /// `<Node:'name'>`, with the label taken from the settings.
    pub fn repr(&self, node: NodeId) -> NodeResult<String> {
        Ok(format!("<{}:'{}'>", self.settings.node_label, self.node(node)?.name))
    }

    fn repr_line(&self, node: NodeId) -> NodeResult<String> {
        let mut line = self.repr(node)?;
        if !self.node(node)?.children.is_empty() {
            line.push_str(&self.settings.branch_marker);
        }
        Ok(line)
    }

    /// `node` and all its descendants, one per line, indented by depth.
    ///
    /// ```text
    /// <Node:'root'>/
    ///     <Node:'A'>/
    ///         <Node:'A1'>
    ///     <Node:'B'>
    /// ```
    pub fn repr_tree(&self, node: NodeId) -> NodeResult<String> {
        let mut lines = vec![self.repr_line(node)?];
        for step in self.iter_tree(node, false)? {
            lines.push(format!(
                "{}{}",
                self.settings.indent.repeat(step.depth()),
                self.repr_line(step.node)?
            ));
        }
        Ok(lines.join("\n"))
    }

    /// Ancestors of `node` from the root, joined by `separator`.
    /// The node itself is not included.
    pub fn repr_path(&self, node: NodeId, separator: &str) -> NodeResult<String> {
        let reprs = self
            .get_path(node)?
            .into_iter()
            .map(|id| self.repr(id))
            .collect::<NodeResult<Vec<_>>>()?;
        Ok(reprs.iter().join(separator))
    }

    /// [`repr_path`](Self::repr_path) with the configured separator.
    pub fn repr_path_default(&self, node: NodeId) -> NodeResult<String> {
        self.repr_path(node, &self.settings.path_separator)
    }
}
