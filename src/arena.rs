use generational_arena::{Arena, Index};
use std::fmt;
use tracing::{debug, instrument};

use crate::config::Settings;
use crate::errors::{NodeError, NodeResult};
use crate::hooks::{NoHooks, NodeHooks};
use crate::index::insert_position;

/// Index reported by [`NodeArena::get_index`] for a node without parent.
pub const NO_INDEX: isize = -1;

/// Insertion index that appends after the last child.
pub const END: isize = -1;

/// Handle of a node inside a [`NodeArena`].
///
/// Handles are generational: once a node is freed its handle never addresses
/// another node, and every operation on it fails with [`NodeError::InvalidNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{}.{}", slot, generation)
    }
}

/// A named node with at most one parent and an ordered list of children.
#[derive(Debug)]
pub struct Node {
    /// Unique among the siblings at the time of insertion or rename
    pub(crate) name: String,
    /// Non-owning link used for navigation, None for roots
    pub(crate) parent: Option<NodeId>,
    /// Owned children in display order
    pub(crate) children: Vec<NodeId>,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena holding every node of one or more hierarchies.
///
/// The arena owns all nodes; parent and child links are handles into it. All
/// structural changes go through `&mut self`, so a graph has a single writer.
/// Hooks of type `H` are invoked at the points documented on [`NodeHooks`].
#[derive(Debug)]
pub struct NodeArena<H: NodeHooks = NoHooks> {
    pub(crate) arena: Arena<Node>,
    pub(crate) hooks: H,
    pub(crate) settings: Settings,
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeArena {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_hooks_and_settings(NoHooks, settings)
    }
}

impl<H: NodeHooks> NodeArena<H> {
    pub fn with_hooks(hooks: H) -> Self {
        Self::with_hooks_and_settings(hooks, Settings::default())
    }

    pub fn with_hooks_and_settings(hooks: H, settings: Settings) -> Self {
        Self {
            arena: Arena::new(),
            hooks,
            settings,
        }
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    /// Iterates over all live nodes in slot order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.arena.iter().map(|(idx, node)| (NodeId(idx), node))
    }

    /// Creates a detached node.
    #[instrument(level = "trace", skip(self, name))]
    pub fn new_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.arena.insert(Node::new(name.into())));
        debug!("created node {}", id);
        id
    }

    /// Creates a detached node named after `Settings::default_name`.
    pub fn new_default_node(&mut self) -> NodeId {
        let name = self.settings.default_name.clone();
        self.new_node(name)
    }

    pub fn node(&self, id: NodeId) -> NodeResult<&Node> {
        self.arena.get(id.0).ok_or(NodeError::InvalidNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> NodeResult<&mut Node> {
        self.arena.get_mut(id.0).ok_or(NodeError::InvalidNode(id))
    }

    pub(crate) fn remove_from_arena(&mut self, id: NodeId) -> Option<Node> {
        self.arena.remove(id.0)
    }

    pub fn name(&self, id: NodeId) -> NodeResult<&str> {
        Ok(self.node(id)?.name())
    }

    pub fn parent(&self, id: NodeId) -> NodeResult<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    pub fn children(&self, id: NodeId) -> NodeResult<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    /// Returns true if `ancestor` is found walking up the parents of `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> NodeResult<bool> {
        let mut current = self.node(node)?.parent;
        while let Some(id) = current {
            if id == ancestor {
                return Ok(true);
            }
            current = self.node(id)?.parent;
        }
        Ok(false)
    }

    /// Appends `child` to the children of `parent`.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> NodeResult<()> {
        self.insert_child(parent, child, END)
    }

    /// Parents `child` with `parent` at `index` (negative counts from the end).
    ///
    /// The child keeps its name unless a sibling already uses it, in which case
    /// a numeric suffix is appended. Hooks run after the link is complete:
    /// `renamed` on the child, `child_added` on the parent, then
    /// `parent_changed` on the child.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_child(&mut self, parent: NodeId, child: NodeId, index: isize) -> NodeResult<()> {
        self.node(parent)?;
        let child_node = self.node(child)?;
        if child_node.parent.is_some() {
            return Err(NodeError::AlreadyParented(child));
        }
        if child == parent || self.is_ancestor(child, parent)? {
            return Err(NodeError::CycleDetected { parent, child });
        }
        let name = child_node.name.clone();

        let siblings = &mut self.node_mut(parent)?.children;
        let position = insert_position(index, siblings.len());
        siblings.insert(position, child);
        self.node_mut(child)?.parent = Some(parent);
        debug!("attached {} to {} at {}", child, parent, position);

        self.rename(child, &name)?;
        self.hooks.child_added(parent, child);
        self.hooks.parent_changed(child, Some(parent));
        Ok(())
    }

    /// Detaches `child` from `parent`.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> NodeResult<()> {
        self.node(parent)?;
        if self.node(child)?.parent != Some(parent) {
            return Err(NodeError::NotAChild { parent, child });
        }

        self.node_mut(child)?.parent = None;
        self.node_mut(parent)?.children.retain(|&c| c != child);
        debug!("detached {} from {}", child, parent);

        self.hooks.parent_changed(child, None);
        self.hooks.child_removed(parent, child);
        Ok(())
    }

    /// Detaches `node` from its parent.
    pub fn remove(&mut self, node: NodeId) -> NodeResult<()> {
        let parent = self.node(node)?.parent.ok_or(NodeError::NoParent(node))?;
        self.remove_child(parent, node)
    }

    /// Moves `child` to `index`, resolved against the list of its other siblings.
    #[instrument(level = "trace", skip(self))]
    pub fn move_child(&mut self, parent: NodeId, child: NodeId, index: isize) -> NodeResult<()> {
        self.node(parent)?;
        if self.node(child)?.parent != Some(parent) {
            return Err(NodeError::NotAChild { parent, child });
        }

        let siblings = &mut self.node_mut(parent)?.children;
        siblings.retain(|&c| c != child);
        let position = insert_position(index, siblings.len());
        siblings.insert(position, child);
        debug!("moved {} under {} to {}", child, parent, position);
        Ok(())
    }

    /// Moves `node` to `index` inside its parent's children.
    pub fn move_node(&mut self, node: NodeId, index: isize) -> NodeResult<()> {
        let parent = self.node(node)?.parent.ok_or(NodeError::NoParent(node))?;
        self.move_child(parent, node, index)
    }

    /// Position of `node` among its siblings, or [`NO_INDEX`] without parent.
    pub fn get_index(&self, node: NodeId) -> NodeResult<isize> {
        let Some(parent) = self.node(node)?.parent else {
            return Ok(NO_INDEX);
        };
        Ok(self
            .node(parent)?
            .children
            .iter()
            .position(|&c| c == node)
            .map_or(NO_INDEX, |p| p as isize))
    }

    /// Top-level ancestor of `node`, or `node` itself if it has no parent.
    pub fn get_root(&self, node: NodeId) -> NodeResult<NodeId> {
        let mut current = node;
        while let Some(parent) = self.node(current)?.parent {
            current = parent;
        }
        Ok(current)
    }

    /// Ancestors of `node` ordered from the root down to its parent.
    pub fn get_path(&self, node: NodeId) -> NodeResult<Vec<NodeId>> {
        let mut path = Vec::new();
        let mut current = self.node(node)?.parent;
        while let Some(id) = current {
            path.push(id);
            current = self.node(id)?.parent;
        }
        path.reverse();
        Ok(path)
    }

    pub fn get_child_count(&self, node: NodeId) -> NodeResult<usize> {
        Ok(self.node(node)?.children.len())
    }
}
