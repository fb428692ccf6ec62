//! The two insertion forms.
//!
//! Both walk the tree with a loop rather than recursing, so building a degenerate
//! tree (every value larger than the last) never grows the call stack, and both
//! route a value equal to a node's value into that node's right subtree.

use std::mem;
use std::rc::Rc;

use tracing::trace;

use crate::tree::Tree;

/// One step of the descent, holding the sibling that the rebuilt path will share.
enum Step<'a, V> {
    WentLeft { pivot: &'a V, right: &'a Rc<Tree<V>> },
    WentRight { left: &'a Rc<Tree<V>>, pivot: &'a V },
}

/// Persistent insertion: returns a new root containing every value of `root`
/// plus `value`. `root` itself is left untouched.
///
/// Only the nodes on the path from the root to the insertion point are rebuilt;
/// every subtree hanging off that path is shared with `root`.
pub fn insert<V: Ord + Clone>(root: &Rc<Tree<V>>, value: V) -> Rc<Tree<V>> {
    trace!(target: "tramp_tree::insert", form = "persistent", "insert");

    let mut path = Vec::new();
    let mut cursor = root;
    while let Tree::Node(left, pivot, right) = cursor.as_ref() {
        if value < *pivot {
            path.push(Step::WentLeft { pivot, right });
            cursor = left;
        } else {
            path.push(Step::WentRight { left, pivot });
            cursor = right;
        }
    }

    let bottom = match cursor.as_ref() {
        Tree::Leaf(pivot) => Some(pivot.clone()),
        _ => None,
    };
    let mut rebuilt = Rc::new(grow(bottom, value));
    for step in path.into_iter().rev() {
        let node = match step {
            Step::WentLeft { pivot, right } => Tree::Node(rebuilt, pivot.clone(), Rc::clone(right)),
            Step::WentRight { left, pivot } => Tree::Node(Rc::clone(left), pivot.clone(), rebuilt),
        };
        rebuilt = Rc::new(node);
    }
    rebuilt
}

/// Iterative in-place insertion: walks down from `root` and replaces the first
/// empty or leaf subtree on the search path with its grown form.
///
/// Each node on the path is reached through [`Rc::make_mut`]. Nodes owned only by
/// this tree are rewritten destructively; a node still shared with some other
/// root (a snapshot) is copied first, so that other root never sees the change.
pub fn insert_in_place<V: Ord + Clone>(root: &mut Rc<Tree<V>>, value: V) {
    trace!(target: "tramp_tree::insert", form = "in_place", "insert");

    let mut slot = root;
    loop {
        match Rc::make_mut(slot) {
            Tree::Node(left, pivot, right) => {
                slot = if value < *pivot { left } else { right };
            }
            bottom => {
                let pivot = match mem::take(bottom) {
                    Tree::Leaf(pivot) => Some(pivot),
                    _ => None,
                };
                *bottom = grow(pivot, value);
                return;
            }
        }
    }
}

/// What the bottom of a search path becomes once `value` is added: an empty
/// subtree (`None`) turns into a leaf, a leaf holding `pivot` into an internal node
/// with one leaf child.
fn grow<V: Ord>(pivot: Option<V>, value: V) -> Tree<V> {
    match pivot {
        None => Tree::Leaf(value),
        Some(pivot) if value < pivot => {
            Tree::Node(Rc::new(Tree::Leaf(value)), pivot, Rc::new(Tree::Empty))
        }
        Some(pivot) => Tree::Node(Rc::new(Tree::Empty), pivot, Rc::new(Tree::Leaf(value))),
    }
}
