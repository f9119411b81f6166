//! Extension points invoked by the arena around structural changes.
//!
//! All methods default to no-ops. Implementors receive handles only; the arena
//! is mid-operation when a hook runs, so hooks record or react through their
//! own state.

use crate::arena::NodeId;

pub trait NodeHooks {
    /// Runs before `node` detaches from its parent during `free`.
    fn pre_free(&mut self, _node: NodeId) {}

    /// Runs after `node` adopted `name`, either explicitly or while
    /// being made unique among its siblings.
    fn renamed(&mut self, _node: NodeId, _name: &str) {}

    /// Runs after the parent of `node` was set or cleared.
    fn parent_changed(&mut self, _node: NodeId, _parent: Option<NodeId>) {}

    fn child_added(&mut self, _parent: NodeId, _child: NodeId) {}

    fn child_removed(&mut self, _parent: NodeId, _child: NodeId) {}
}

/// Hooks that do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl NodeHooks for NoHooks {}

/// Every hook invocation, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
    PreFree(NodeId),
    Renamed(NodeId, String),
    ParentChanged(NodeId, Option<NodeId>),
    ChildAdded { parent: NodeId, child: NodeId },
    ChildRemoved { parent: NodeId, child: NodeId },
}

/// Records hook invocations, useful for auditing structural changes.
#[derive(Debug, Default, Clone)]
pub struct RecordingHooks {
    pub events: Vec<HookEvent>,
}

impl RecordingHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events and clears the log.
    pub fn take(&mut self) -> Vec<HookEvent> {
        std::mem::take(&mut self.events)
    }
}

impl NodeHooks for RecordingHooks {
    fn pre_free(&mut self, node: NodeId) {
        self.events.push(HookEvent::PreFree(node));
    }

    fn renamed(&mut self, node: NodeId, name: &str) {
        self.events.push(HookEvent::Renamed(node, name.to_string()));
    }

    fn parent_changed(&mut self, node: NodeId, parent: Option<NodeId>) {
        self.events.push(HookEvent::ParentChanged(node, parent));
    }

    fn child_added(&mut self, parent: NodeId, child: NodeId) {
        self.events.push(HookEvent::ChildAdded { parent, child });
    }

    fn child_removed(&mut self, parent: NodeId, child: NodeId) {
        self.events.push(HookEvent::ChildRemoved { parent, child });
    }
}
