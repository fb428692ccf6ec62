//! Degenerate chains far deeper than any recursive traversal can handle. Only the
//! trampolined strategy and the explicit-stack simulator are run over them.

use tramp_tree::{BinaryTree, Strategy};

use crate::init_tracing;
use crate::inputs::{ascending, build_in_place, constant, descending, sorted};

const DEPTH: usize = 10_000;

fn check_deep(values: &[i64]) {
    let tree = build_in_place(values);
    assert_eq!(tree.depth(), DEPTH);

    let expected = sorted(values);
    assert_eq!(tree.traverse_with(Strategy::Thunk, |v| *v), expected);
    assert_eq!(tree.traverse_explicit_stack(|v| *v), expected);
    assert_eq!(tree.to_vec(), expected);
}

#[test]
fn deep_ascending_chain() {
    init_tracing();
    check_deep(&ascending(DEPTH));
}

#[test]
fn deep_descending_chain() {
    init_tracing();
    check_deep(&descending(DEPTH));
}

#[test]
fn deep_chain_of_duplicates() {
    init_tracing();
    check_deep(&constant(DEPTH, 7));
}

#[test]
fn deep_persistent_insert_and_snapshot() {
    init_tracing();
    let mut tree: BinaryTree<i64> = build_in_place(&ascending(DEPTH));
    let snapshot = tree.snapshot();

    // walks the full chain and copies every node on it
    tree.insert(DEPTH as i64);

    assert_eq!(snapshot.depth(), DEPTH);
    assert_eq!(tree.depth(), DEPTH + 1);
    assert_eq!(tree.traverse(|v| *v).len(), DEPTH + 1);

    drop(tree);
    assert_eq!(snapshot.traverse_explicit_stack(|v| *v), ascending(DEPTH));
}
