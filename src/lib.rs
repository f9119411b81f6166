//! Hierarchical node graph.
//!
//! Nodes live in a [`NodeArena`] and are addressed by [`NodeId`] handles. Each
//! node has a name, at most one parent and an ordered list of children whose
//! names are kept unique on insertion and rename.
//!
//! ```
//! use nodeclass::{ChildKey, NodeArena};
//!
//! let mut arena = NodeArena::new();
//! let root = arena.new_node("root");
//! let a = arena.new_node("X");
//! let b = arena.new_node("X");
//! arena.add_child(root, a)?;
//! arena.add_child(root, b)?;
//!
//! assert_eq!(arena.name(b)?, "X1");
//! assert_eq!(arena.get_child(root, &[ChildKey::from("X1")])?, Some(b));
//! # Ok::<(), nodeclass::NodeError>(())
//! ```

pub mod arena;
pub mod config;
pub mod errors;
pub mod hooks;
pub mod index;
pub mod lifecycle;
pub mod naming;
pub mod render;
pub mod tree_traits;
pub mod util;
pub mod walk;

pub use arena::{Node, NodeArena, NodeId, END, NO_INDEX};
pub use config::Settings;
pub use errors::{NodeError, NodeResult};
pub use hooks::{HookEvent, NoHooks, NodeHooks, RecordingHooks};
pub use index::{insert_position, lookup_position, ChildKey};
pub use naming::resolve_unique_name;
pub use tree_traits::TreeNodeConvert;
pub use walk::{TreeWalk, WalkStep};

/// Builds a [`ChildKey`] path from mixed index and name literals.
///
/// ```
/// use nodeclass::{child_path, ChildKey};
///
/// assert_eq!(child_path![0, "amogus"], vec![ChildKey::Index(0), ChildKey::from("amogus")]);
/// ```
#[macro_export]
macro_rules! child_path {
    ($($key:expr),* $(,)?) => {
        vec![$($crate::ChildKey::from($key)),*]
    };
}
