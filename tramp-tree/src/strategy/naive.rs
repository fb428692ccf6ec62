use crate::continuation::{concat, MapFn};
use crate::tree::Tree;

/// Direct divide and conquer: `inorder(left) ++ [map(value)] ++ inorder(right)`.
///
/// Recurses once per level of the tree.
pub fn inorder<V, O>(root: &Tree<V>, map: MapFn<'_, V, O>) -> Vec<O> {
    match root {
        Tree::Empty => Vec::new(),
        Tree::Leaf(value) => vec![map(value)],
        Tree::Node(left, value, right) => {
            concat(inorder(&**left, map), map(value), inorder(&**right, map))
        }
    }
}
