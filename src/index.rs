//! Child index normalization and key-based child lookup.

use std::fmt;

use tracing::instrument;

use crate::arena::{NodeArena, NodeId};
use crate::errors::{NodeError, NodeResult};
use crate::hooks::NodeHooks;

/// Resolves an insertion index against `len` children.
///
/// Positive indices past the end append, negative indices count from the end
/// (`-1` appends) and indices before the start prepend.
pub fn insert_position(index: isize, len: usize) -> usize {
    if index >= 0 {
        (index as usize).min(len)
    } else {
        let back = index.unsigned_abs();
        if back > len {
            0
        } else {
            len - back + 1
        }
    }
}

/// Resolves a lookup index against `len` children, None when out of range.
pub fn lookup_position(index: isize, len: usize) -> Option<usize> {
    if index >= 0 {
        let index = index as usize;
        (index < len).then_some(index)
    } else {
        let back = index.unsigned_abs();
        (back <= len).then(|| len - back)
    }
}

/// One step of a child path: a position or a sibling name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChildKey {
    Index(isize),
    Name(String),
}

impl ChildKey {
    /// Splits a textual path such as `"0/amogus/-1"` into keys.
    ///
    /// Segments parsing as integers become indices, anything else a name.
    /// Empty segments are skipped.
    pub fn parse_path(path: &str, separator: &str) -> Vec<ChildKey> {
        path.split(separator)
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.parse::<isize>() {
                Ok(index) => ChildKey::Index(index),
                Err(_) => ChildKey::Name(segment.to_string()),
            })
            .collect()
    }
}

impl fmt::Display for ChildKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildKey::Index(index) => write!(f, "{}", index),
            ChildKey::Name(name) => write!(f, "'{}'", name),
        }
    }
}

macro_rules! child_key_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ChildKey {
                fn from(index: $t) -> Self {
                    ChildKey::Index(index as isize)
                }
            }
        )*
    };
}

child_key_from_int!(isize, i32, i16, i8);

// Values beyond isize saturate, which resolves the same way: appended on
// insertion, a miss on lookup.
macro_rules! child_key_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ChildKey {
                fn from(index: $t) -> Self {
                    let saturated = if index > 0 { isize::MAX } else { isize::MIN };
                    ChildKey::Index(isize::try_from(index).unwrap_or(saturated))
                }
            }
        )*
    };
}

child_key_from_wide_int!(usize, u64, u32, u16, u8, i64);

impl From<&str> for ChildKey {
    fn from(name: &str) -> Self {
        ChildKey::Name(name.to_string())
    }
}

impl From<String> for ChildKey {
    fn from(name: String) -> Self {
        ChildKey::Name(name)
    }
}

impl From<&String> for ChildKey {
    fn from(name: &String) -> Self {
        ChildKey::Name(name.clone())
    }
}

/// Keys from untyped documents: only integers and strings address children.
impl TryFrom<&toml::Value> for ChildKey {
    type Error = NodeError;

    fn try_from(value: &toml::Value) -> Result<Self, Self::Error> {
        match value {
            toml::Value::Integer(index) => isize::try_from(*index)
                .map(ChildKey::Index)
                .map_err(|_| NodeError::InvalidKeyType(format!("integer {} out of range", index))),
            toml::Value::String(name) => Ok(ChildKey::Name(name.clone())),
            other => Err(NodeError::InvalidKeyType(other.type_str().to_string())),
        }
    }
}

impl TryFrom<toml::Value> for ChildKey {
    type Error = NodeError;

    fn try_from(value: toml::Value) -> Result<Self, Self::Error> {
        ChildKey::try_from(&value)
    }
}

impl<H: NodeHooks> NodeArena<H> {
    /// First direct child of `node` named `name`.
    pub fn find_child_by_name(&self, node: NodeId, name: &str) -> NodeResult<Option<NodeId>> {
        let children = &self.node(node)?.children;
        for &child in children {
            if self.node(child)?.name == name {
                return Ok(Some(child));
            }
        }
        Ok(None)
    }

    fn child_by_key(&self, node: NodeId, key: &ChildKey) -> NodeResult<Option<NodeId>> {
        match key {
            ChildKey::Index(index) => {
                let children = &self.node(node)?.children;
                Ok(lookup_position(*index, children.len()).map(|p| children[p]))
            }
            ChildKey::Name(name) => self.find_child_by_name(node, name),
        }
    }

    /// Follows `path` from `node`, one key per level.
    ///
    /// Out of range indices and unknown names yield `Ok(None)`, as does an
    /// empty path. Errors are reserved for invalid handles.
    #[instrument(level = "trace", skip(self))]
    pub fn get_child(&self, node: NodeId, path: &[ChildKey]) -> NodeResult<Option<NodeId>> {
        if path.is_empty() {
            self.node(node)?;
            return Ok(None);
        }
        let mut current = node;
        for key in path {
            match self.child_by_key(current, key)? {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    /// [`get_child`](Self::get_child) with keys from an untyped document.
    ///
    /// Every key is validated before the lookup starts, so a bad key type is
    /// reported even when an earlier step would miss.
    pub fn get_child_by_values(&self, node: NodeId, path: &[toml::Value]) -> NodeResult<Option<NodeId>> {
        let keys = path
            .iter()
            .map(ChildKey::try_from)
            .collect::<NodeResult<Vec<_>>>()?;
        self.get_child(node, &keys)
    }

    /// [`get_child`](Self::get_child) with a textual path, see [`ChildKey::parse_path`].
    pub fn get_child_by_path(&self, node: NodeId, path: &str, separator: &str) -> NodeResult<Option<NodeId>> {
        self.get_child(node, &ChildKey::parse_path(path, separator))
    }
}
