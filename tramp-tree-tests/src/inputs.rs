//! Value sequences to feed through `insert`, and the sorted reference to check
//! traversals against.

use proptest::prelude::*;
use tramp_tree::BinaryTree;

/// `0, 1, .., n - 1`: every value lands in the right subtree of the one before,
/// giving a right-only chain of depth `n`.
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

/// `n - 1, .., 0`: a left-only chain of depth `n`.
pub fn descending(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

/// `n` copies of `value`. Ties go right, so this is a right-only chain as well.
pub fn constant(n: usize, value: i64) -> Vec<i64> {
    vec![value; n]
}

pub fn build_persistent(values: &[i64]) -> BinaryTree<i64> {
    let mut tree = BinaryTree::new();
    for v in values {
        tree.insert(*v);
    }
    tree
}

pub fn build_in_place(values: &[i64]) -> BinaryTree<i64> {
    values.iter().copied().collect()
}

pub fn sorted(values: &[i64]) -> Vec<i64> {
    let mut values = values.to_vec();
    values.sort();
    values
}

/// Arbitrary, duplicate-heavy and already-ordered sequences of up to 256 values.
///
/// 256 levels is well within what the recursive strategies can handle on a test
/// thread's stack.
pub fn arb_values() -> impl Strategy<Value = Vec<i64>> {
    prop_oneof![
        prop::collection::vec(any::<i64>(), 0..256),
        prop::collection::vec(0i64..8, 0..256),
        (0usize..256).prop_map(ascending),
        (0usize..256).prop_map(descending),
        (0usize..256, any::<i64>()).prop_map(|(n, v)| constant(n, v)),
    ]
}
