//! Continuation passing with every closure built by a named constructor.
//!
//! The three constructors below are exactly the three variants of
//! [`Continuation`](crate::Continuation): reading them side by side with that enum
//! shows which captured variables became which fields.

use crate::continuation::{concat, MapFn};
use crate::strategy::cps::Cont;
use crate::tree::Tree;

pub fn inorder<'a, V, O: 'a>(root: &'a Tree<V>, map: MapFn<'a, V, O>) -> Vec<O> {
    traverse(root, map, done())
}

fn traverse<'a, V, O: 'a>(root: &'a Tree<V>, map: MapFn<'a, V, O>, cont: Cont<'a, O>) -> Vec<O> {
    match root {
        Tree::Empty => cont(Vec::new()),
        Tree::Leaf(value) => cont(vec![map(value)]),
        Tree::Node(left, value, right) => cont(traverse(&**left, map, next(value, &**right, map))),
    }
}

/// Hand the result back unchanged.
fn done<'a, O: 'a>() -> Cont<'a, O> {
    Box::new(|result: Vec<O>| result)
}

/// Given the left result, traverse `right` and join the two around `value`.
fn next<'a, V, O: 'a>(value: &'a V, right: &'a Tree<V>, map: MapFn<'a, V, O>) -> Cont<'a, O> {
    Box::new(move |ls: Vec<O>| traverse(right, map, concat_with(ls, value, map)))
}

/// Given the right result, produce `left ++ [map(value)] ++ right`.
fn concat_with<'a, V, O: 'a>(left: Vec<O>, value: &'a V, map: MapFn<'a, V, O>) -> Cont<'a, O> {
    Box::new(move |rs: Vec<O>| concat(left, map(value), rs))
}
