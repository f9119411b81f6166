#![allow(dead_code)]

use nodeclass::{NodeArena, NodeHooks, NodeId};

/// root -> [A -> [A1, A2], B]
pub struct Sample<H: NodeHooks> {
    pub arena: NodeArena<H>,
    pub root: NodeId,
    pub a: NodeId,
    pub a1: NodeId,
    pub a2: NodeId,
    pub b: NodeId,
}

pub fn build_sample<H: NodeHooks>(mut arena: NodeArena<H>) -> Sample<H> {
    let root = arena.new_node("root");
    let a = arena.new_node("A");
    let a1 = arena.new_node("A1");
    let a2 = arena.new_node("A2");
    let b = arena.new_node("B");
    arena.add_child(root, a).unwrap();
    arena.add_child(a, a1).unwrap();
    arena.add_child(a, a2).unwrap();
    arena.add_child(root, b).unwrap();
    Sample {
        arena,
        root,
        a,
        a1,
        a2,
        b,
    }
}

pub fn names<H: NodeHooks>(arena: &NodeArena<H>, ids: &[NodeId]) -> Vec<String> {
    ids.iter()
        .map(|&id| arena.name(id).unwrap().to_string())
        .collect()
}
