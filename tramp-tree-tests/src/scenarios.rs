use tramp_tree::{BinaryTree, Error, Strategy};

use crate::init_tracing;
use crate::inputs::{build_in_place, build_persistent};

#[test]
fn mixed_insertions_then_naive() {
    init_tracing();
    let tree = build_persistent(&[2, 1, 0, 3, 4]);
    assert_eq!(tree.traverse_by_name("naive", |v| *v), Ok(vec![0, 1, 2, 3, 4]));
}

#[test]
fn simulator_on_three_values() {
    init_tracing();
    let tree = build_persistent(&[2, 1, 3]);
    assert_eq!(tree.traverse_explicit_stack(|v| *v), vec![1, 2, 3]);
}

#[test]
fn empty_tree_yields_nothing() {
    init_tracing();
    let tree = BinaryTree::<i64>::new();
    for strategy in Strategy::ALL {
        assert!(tree.traverse_with(strategy, |v| *v).is_empty(), "{strategy}");
        assert_eq!(tree.traverse_by_name(strategy.name(), |v| *v), Ok(vec![]));
    }
    assert!(tree.traverse_explicit_stack(|v| *v).is_empty());
    assert_eq!(tree.depth(), 0);
}

#[test]
fn duplicates_are_kept_not_merged() {
    init_tracing();
    for tree in [build_persistent(&[5, 5, 5]), build_in_place(&[5, 5, 5])] {
        for strategy in Strategy::ALL {
            assert_eq!(tree.traverse_with(strategy, |v| *v), vec![5, 5, 5], "{strategy}");
        }
        assert_eq!(tree.traverse_explicit_stack(|v| *v), vec![5, 5, 5]);
        assert_eq!(tree.len(), 3);
    }
}

#[test]
fn unknown_strategy_fails_even_when_empty() {
    init_tracing();
    let err = BinaryTree::<i64>::new()
        .traverse_by_name("bogus", |v| *v)
        .unwrap_err();
    assert_eq!(err, Error::InvalidStrategy("bogus".to_string()));
    assert!(err.to_string().contains("naive, cps, explicit, apply, thunk"));
}

#[test]
fn map_changes_element_type() {
    init_tracing();
    let tree = build_in_place(&[3, 1, 2]);
    assert_eq!(
        tree.traverse(|v| format!("#{v}")),
        vec!["#1".to_string(), "#2".to_string(), "#3".to_string()]
    );
    assert_eq!(tree.traverse(|v| v % 2 == 0), vec![false, true, false]);
}

#[test]
fn snapshot_after_in_place_insert_is_unchanged() {
    init_tracing();
    let mut tree = build_persistent(&[4, 2, 6]);
    let snapshot = tree.snapshot();
    tree.insert_in_place(3);
    tree.insert(7);

    assert_eq!(snapshot.to_vec(), vec![2, 4, 6]);
    assert_eq!(tree.to_vec(), vec![2, 3, 4, 6, 7]);
}
