//! The [`apply`](super::apply) interpreter, trampolined.
//!
//! The branching is identical, but wherever `apply` would call `traverse` or
//! itself, this module returns a [`Call`] naming that function and its arguments.
//! [`trampoline::run`] performs the calls one at a time in a loop, so the native
//! stack stays flat and all of the pending work lives in the heap-allocated
//! [`Continuation`] chain.

use crate::continuation::{concat, Continuation, MapFn};
use crate::trampoline::{self, Bounce, Suspended};
use crate::tree::Tree;

/// A call that has not been made yet.
pub enum Call<'a, V, O> {
    Traverse {
        root: &'a Tree<V>,
        map: MapFn<'a, V, O>,
        cont: Continuation<'a, V, O>,
    },
    Apply {
        cont: Continuation<'a, V, O>,
        result: Vec<O>,
    },
}

impl<'a, V, O> Suspended for Call<'a, V, O> {
    type Output = Vec<O>;

    fn resume(self) -> Bounce<Self, Vec<O>> {
        match self {
            Call::Traverse { root, map, cont } => traverse(root, map, cont),
            Call::Apply { cont, result } => apply(cont, result),
        }
    }
}

pub fn inorder<'a, V, O>(root: &'a Tree<V>, map: MapFn<'a, V, O>) -> Vec<O> {
    trampoline::run(Bounce::Pending(Call::Traverse {
        root,
        map,
        cont: Continuation::Done,
    }))
}

pub fn traverse<'a, V, O>(
    root: &'a Tree<V>,
    map: MapFn<'a, V, O>,
    cont: Continuation<'a, V, O>,
) -> Bounce<Call<'a, V, O>, Vec<O>> {
    let call = match root {
        Tree::Empty => Call::Apply {
            cont,
            result: Vec::new(),
        },
        Tree::Leaf(value) => Call::Apply {
            cont,
            result: vec![map(value)],
        },
        Tree::Node(left, value, right) => Call::Traverse {
            root: &**left,
            map,
            cont: Continuation::Next {
                right: &**right,
                value,
                map,
                next: Box::new(cont),
            },
        },
    };
    Bounce::Pending(call)
}

pub fn apply<'a, V, O>(cont: Continuation<'a, V, O>, result: Vec<O>) -> Bounce<Call<'a, V, O>, Vec<O>> {
    match cont {
        Continuation::Done => Bounce::Done(result),
        Continuation::Next {
            right,
            value,
            map,
            next,
        } => Bounce::Pending(Call::Traverse {
            root: right,
            map,
            cont: Continuation::Concat {
                left: result,
                value,
                map,
                next,
            },
        }),
        Continuation::Concat {
            left,
            value,
            map,
            next,
        } => Bounce::Pending(Call::Apply {
            cont: *next,
            result: concat(left, map(value), result),
        }),
    }
}
