//! Sibling name uniqueness.

use tracing::{debug, instrument};

use crate::arena::{NodeArena, NodeId};
use crate::errors::NodeResult;
use crate::hooks::NodeHooks;

/// Returns `proposed` if no sibling uses it, otherwise the first of
/// `proposed1`, `proposed2`, ... that is free.
pub fn resolve_unique_name<'a, I>(proposed: &str, siblings: I) -> String
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let siblings = siblings.into_iter();
    let is_taken = |candidate: &str| siblings.clone().any(|name| name == candidate);

    let mut candidate = proposed.to_string();
    let mut count: u64 = 0;
    while is_taken(&candidate) {
        count += 1;
        candidate = format!("{}{}", proposed, count);
    }
    candidate
}

impl<H: NodeHooks> NodeArena<H> {
    /// Renames `node`, appending a numeric suffix when a sibling already
    /// carries the name. Nodes without parent take `name` unchanged.
    #[instrument(level = "trace", skip(self))]
    pub fn rename(&mut self, node: NodeId, name: &str) -> NodeResult<()> {
        let resolved = match self.node(node)?.parent {
            Some(parent) => {
                let siblings = self
                    .node(parent)?
                    .children
                    .iter()
                    .filter(|&&c| c != node)
                    .filter_map(|&c| self.node(c).ok())
                    .map(|n| n.name.as_str());
                resolve_unique_name(name, siblings)
            }
            None => name.to_string(),
        };

        if resolved != name {
            debug!("renamed {} to '{}' to avoid '{}' collision", node, resolved, name);
        }
        self.node_mut(node)?.name = resolved.clone();
        self.hooks.renamed(node, &resolved);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_name_is_kept() {
        assert_eq!(resolve_unique_name("X", ["A", "B"]), "X");
    }

    #[test]
    fn test_collision_appends_counter() {
        assert_eq!(resolve_unique_name("X", ["X"]), "X1");
        assert_eq!(resolve_unique_name("X", ["X", "X1"]), "X2");
    }

    #[test]
    fn test_counter_skips_taken_suffixes() {
        assert_eq!(resolve_unique_name("X", ["X", "X2", "X1", "X3"]), "X4");
    }

    #[test]
    fn test_suffix_is_appended_to_proposed_name() {
        // "X1" collides, so the candidates are "X11", "X12", ...
        assert_eq!(resolve_unique_name("X1", ["X1", "X11"]), "X12");
    }

    #[test]
    fn test_empty_siblings() {
        assert_eq!(resolve_unique_name("", std::iter::empty()), "");
    }
}
