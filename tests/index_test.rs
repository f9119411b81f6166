//! Tests for positional and name based child lookup

mod common;

use common::{build_sample, Sample};
use nodeclass::{child_path, ChildKey, NodeArena, NodeError, NoHooks};
use rstest::{fixture, rstest};

#[fixture]
fn sample() -> Sample<NoHooks> {
    build_sample(NodeArena::new())
}

#[rstest]
fn given_grandchild_named_amogus_when_looking_up_index_then_name_then_found() {
    let mut arena = NodeArena::new();
    let root = arena.new_node("root");
    let first = arena.new_node("first");
    let amogus = arena.new_node("amogus");
    arena.add_child(root, first).unwrap();
    arena.add_child(first, amogus).unwrap();

    assert_eq!(arena.get_child(root, &child_path![0, "amogus"]).unwrap(), Some(amogus));
}

#[rstest]
fn given_out_of_range_index_when_looking_up_then_miss_not_error(sample: Sample<NoHooks>) {
    assert_eq!(sample.arena.get_child(sample.root, &child_path![99]).unwrap(), None);
    assert_eq!(sample.arena.get_child(sample.root, &child_path![-3]).unwrap(), None);
    assert_eq!(sample.arena.get_child(sample.root, &child_path![2]).unwrap(), None);
}

#[rstest]
#[case::first(0, "A")]
#[case::last(1, "B")]
#[case::from_end(-1, "B")]
#[case::from_end_first(-2, "A")]
fn given_root_children_when_looking_up_index_then_position_is_resolved(
    sample: Sample<NoHooks>,
    #[case] index: isize,
    #[case] expected: &str,
) {
    let found = sample
        .arena
        .get_child(sample.root, &[ChildKey::Index(index)])
        .unwrap()
        .unwrap();

    assert_eq!(sample.arena.name(found).unwrap(), expected);
}

#[rstest]
fn given_unknown_name_when_looking_up_then_miss(sample: Sample<NoHooks>) {
    assert_eq!(sample.arena.get_child(sample.root, &child_path!["nope"]).unwrap(), None);
    // A1 is a grandchild, not a direct child
    assert_eq!(sample.arena.get_child(sample.root, &child_path!["A1"]).unwrap(), None);
}

#[rstest]
fn given_miss_in_first_step_when_looking_up_path_then_short_circuits(sample: Sample<NoHooks>) {
    assert_eq!(
        sample.arena.get_child(sample.root, &child_path!["nope", 0]).unwrap(),
        None
    );
    assert_eq!(
        sample.arena.get_child(sample.root, &child_path!["B", 0]).unwrap(),
        None
    );
}

#[rstest]
fn given_mixed_steps_when_looking_up_then_each_step_advances(sample: Sample<NoHooks>) {
    assert_eq!(
        sample.arena.get_child(sample.root, &child_path!["A", -1]).unwrap(),
        Some(sample.a2)
    );
    assert_eq!(
        sample.arena.get_child(sample.root, &child_path![0, "A1"]).unwrap(),
        Some(sample.a1)
    );
}

#[rstest]
fn given_unsigned_positions_when_looking_up_then_resolved_like_signed(sample: Sample<NoHooks>) {
    let position: usize = sample.arena.get_child_count(sample.a).unwrap() - 1;

    assert_eq!(
        sample.arena.get_child(sample.root, &child_path![0u32, position]).unwrap(),
        Some(sample.a2)
    );
    assert_eq!(
        sample.arena.get_child(sample.root, &child_path![usize::MAX]).unwrap(),
        None
    );
}

#[rstest]
fn given_empty_path_when_looking_up_then_miss(sample: Sample<NoHooks>) {
    assert_eq!(sample.arena.get_child(sample.root, &[]).unwrap(), None);
}

#[rstest]
fn given_children_when_finding_by_name_then_exact_match_or_miss() {
    let mut arena = NodeArena::new();
    let parent = arena.new_node("p");
    let first = arena.new_node("x");
    let second = arena.new_node("y");
    arena.add_child(parent, first).unwrap();
    arena.add_child(parent, second).unwrap();

    assert_eq!(arena.find_child_by_name(parent, "x").unwrap(), Some(first));
    assert_eq!(arena.find_child_by_name(parent, "z").unwrap(), None);
}

#[rstest]
fn given_textual_path_when_looking_up_then_segments_are_keys(sample: Sample<NoHooks>) {
    assert_eq!(
        sample.arena.get_child_by_path(sample.root, "0/A2", "/").unwrap(),
        Some(sample.a2)
    );
    assert_eq!(
        sample.arena.get_child_by_path(sample.root, "A.-2", ".").unwrap(),
        Some(sample.a1)
    );
}

#[rstest]
fn given_untyped_keys_when_looking_up_then_integers_and_strings_resolve(sample: Sample<NoHooks>) {
    let path = [toml::Value::String("A".into()), toml::Value::Integer(1)];

    assert_eq!(
        sample.arena.get_child_by_values(sample.root, &path).unwrap(),
        Some(sample.a2)
    );
}

#[rstest]
fn given_boolean_key_when_looking_up_then_invalid_key_type(sample: Sample<NoHooks>) {
    let path = [toml::Value::Integer(99), toml::Value::Boolean(true)];

    assert_eq!(
        sample.arena.get_child_by_values(sample.root, &path),
        Err(NodeError::InvalidKeyType("boolean".to_string()))
    );
}

#[rstest]
fn given_freed_node_when_looking_up_then_invalid_node(mut sample: Sample<NoHooks>) {
    sample.arena.free(sample.b).unwrap();

    assert_eq!(
        sample.arena.get_child(sample.b, &child_path![0]),
        Err(NodeError::InvalidNode(sample.b))
    );
}
