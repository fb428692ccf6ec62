use crate::continuation::{concat, Continuation, MapFn};
use crate::tree::Tree;

/// Defunctionalized traversal: continuations are [`Continuation`] values and
/// [`apply`] interprets them.
///
/// `traverse` and `apply` still call each other directly, so the native stack grows
/// with the depth of the tree exactly as in the closure-based strategies.
pub fn inorder<'a, V, O>(root: &'a Tree<V>, map: MapFn<'a, V, O>) -> Vec<O> {
    traverse(root, map, Continuation::Done)
}

pub fn traverse<'a, V, O>(
    root: &'a Tree<V>,
    map: MapFn<'a, V, O>,
    cont: Continuation<'a, V, O>,
) -> Vec<O> {
    match root {
        Tree::Empty => apply(cont, Vec::new()),
        Tree::Leaf(value) => apply(cont, vec![map(value)]),
        Tree::Node(left, value, right) => traverse(
            left,
            map,
            Continuation::Next {
                right: &**right,
                value,
                map,
                next: Box::new(cont),
            },
        ),
    }
}

/// Feed `result` to `cont`.
pub fn apply<'a, V, O>(cont: Continuation<'a, V, O>, result: Vec<O>) -> Vec<O> {
    match cont {
        Continuation::Done => result,
        Continuation::Next {
            right,
            value,
            map,
            next,
        } => traverse(
            right,
            map,
            Continuation::Concat {
                left: result,
                value,
                map,
                next,
            },
        ),
        Continuation::Concat {
            left,
            value,
            map,
            next,
        } => apply(*next, concat(left, map(value), result)),
    }
}
