use crate::continuation::{concat, MapFn};
use crate::tree::Tree;

/// What to do with the in-order result of a subtree.
pub type Cont<'a, O> = Box<dyn FnOnce(Vec<O>) -> Vec<O> + 'a>;

/// Continuation-passing traversal.
///
/// Every call hands its result to a continuation instead of returning it. Rust does
/// not eliminate tail calls, so each continuation invocation still nests on the
/// native stack.
pub fn inorder<'a, V, O: 'a>(root: &'a Tree<V>, map: MapFn<'a, V, O>) -> Vec<O> {
    traverse(root, map, Box::new(|result: Vec<O>| result))
}

fn traverse<'a, V, O: 'a>(root: &'a Tree<V>, map: MapFn<'a, V, O>, cont: Cont<'a, O>) -> Vec<O> {
    match root {
        Tree::Empty => cont(Vec::new()),
        Tree::Leaf(value) => cont(vec![map(value)]),
        Tree::Node(left, value, right) => traverse(
            &**left,
            map,
            Box::new(move |ls: Vec<O>| {
                traverse(
                    &**right,
                    map,
                    Box::new(move |rs: Vec<O>| cont(concat(ls, map(value), rs))),
                )
            }),
        ),
    }
}
