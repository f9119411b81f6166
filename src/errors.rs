use thiserror::Error;

use crate::arena::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("Node {0} is already parented with a node")]
    AlreadyParented(NodeId),

    #[error("Node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("Node {0} is not parented with a node")]
    NoParent(NodeId),

    /// The handle does not address a live node of this arena.
    #[error("Invalid node handle: {0}")]
    InvalidNode(NodeId),

    #[error("Invalid key type '{0}' used in child path")]
    InvalidKeyType(String),

    #[error("Adding {child} under {parent} would create a cycle")]
    CycleDetected { parent: NodeId, child: NodeId },

    #[error("config error: {message}")]
    Config { message: String },
}

pub type NodeResult<T> = Result<T, NodeError>;
