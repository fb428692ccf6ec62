//! In-order traversal as a classic iterative loop over an explicit stack.
//!
//! This is what the `apply` interpreter becomes once its `Next` continuations are
//! kept in a `Vec` instead of a linked chain: each stack entry is the `(value,
//! right subtree)` pair a `Next` would hold. No `Concat` is needed because results
//! are appended to a single output buffer in order.

use crate::tree::Tree;

/// `map` sees each value borrowed for as long as `root`, so it may return
/// references into the tree.
pub fn inorder<'a, V, O>(root: &'a Tree<V>, map: &dyn Fn(&'a V) -> O) -> Vec<O> {
    let mut out = Vec::new();
    let mut pending: Vec<(&'a V, &'a Tree<V>)> = Vec::new();
    let mut cursor = root;

    loop {
        // descend left, leaving each node's value and right side behind
        loop {
            match cursor {
                Tree::Empty => break,
                Tree::Leaf(value) => {
                    out.push(map(value));
                    break;
                }
                Tree::Node(left, value, right) => {
                    pending.push((value, &**right));
                    cursor = &**left;
                }
            }
        }

        // unwind until some right side needs a descent of its own
        loop {
            let Some((value, right)) = pending.pop() else {
                return out;
            };
            out.push(map(value));
            match right {
                Tree::Empty => {}
                Tree::Leaf(last) => out.push(map(last)),
                Tree::Node(..) => {
                    cursor = right;
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_tree() {
        let tree = Tree::node(Tree::leaf(1), 2, Tree::leaf(3));
        assert_eq!(inorder(&tree, &|v| *v), vec![1, 2, 3]);
    }

    #[test]
    fn left_leaning_tree() {
        // 3 <- 2 <- 1 <- 0, every node only has a left child
        let tree = Tree::node(
            Tree::node(Tree::node(Tree::leaf(0), 1, Tree::Empty), 2, Tree::Empty),
            3,
            Tree::Empty,
        );
        assert_eq!(inorder(&tree, &|v| v * 2), vec![0, 2, 4, 6]);
    }

    #[test]
    fn right_side_internal_node_is_descended() {
        let tree = Tree::node(
            Tree::Empty,
            1,
            Tree::node(Tree::leaf(2), 3, Tree::node(Tree::Empty, 4, Tree::leaf(5))),
        );
        assert_eq!(inorder(&tree, &|v| *v), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_and_leaf() {
        assert!(inorder(&Tree::<i32>::Empty, &|v| *v).is_empty());
        assert_eq!(inorder(&Tree::leaf('a'), &|c| c.to_ascii_uppercase()), vec!['A']);
    }

    #[test]
    fn map_may_borrow_from_the_tree() {
        let tree = Tree::node(Tree::leaf("b".to_string()), "c".to_string(), Tree::Empty);
        let borrowed: Vec<&String> = inorder(&tree, &|s| s);
        assert_eq!(borrowed, vec!["b", "c"]);
    }
}
