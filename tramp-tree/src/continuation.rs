//! "The rest of an in-order traversal", as data.
//!
//! A [`Continuation`] is what the closure-passing strategies build as a chain of
//! nested closures, defunctionalized: one variant per kind of closure, holding the
//! closure's captured variables as fields. The chain of `next` links lives on the
//! heap and stands in for the call-stack frames of the recursive strategies.

use crate::tree::Tree;

/// The mapping function applied to every stored value.
pub type MapFn<'a, V, O> = &'a dyn Fn(&V) -> O;

pub enum Continuation<'a, V, O> {
    /// No work remains.
    Done,
    /// `right` still needs traversing, after which `map(value)` is folded in and
    /// the result handed to `next`.
    Next {
        right: &'a Tree<V>,
        value: &'a V,
        map: MapFn<'a, V, O>,
        next: Box<Continuation<'a, V, O>>,
    },
    /// The left side is computed and held in `left`. Once the right side arrives the
    /// result is `left ++ [map(value)] ++ right`, handed to `next`.
    Concat {
        left: Vec<O>,
        value: &'a V,
        map: MapFn<'a, V, O>,
        next: Box<Continuation<'a, V, O>>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContinuationTag {
    Done,
    Next,
    Concat,
}

impl<'a, V, O> Continuation<'a, V, O> {
    pub fn tag(&self) -> ContinuationTag {
        match self {
            Continuation::Done => ContinuationTag::Done,
            Continuation::Next { .. } => ContinuationTag::Next,
            Continuation::Concat { .. } => ContinuationTag::Concat,
        }
    }

    /// Number of links before `Done`, i.e. how many ancestors are still owed work.
    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut cursor = self;
        while let Continuation::Next { next, .. } | Continuation::Concat { next, .. } = cursor {
            len += 1;
            cursor = &**next;
        }
        len
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Continuation::Done)
    }
}

/// `left ++ [middle] ++ right`, reusing `left`'s allocation.
pub(crate) fn concat<O>(mut left: Vec<O>, middle: O, right: Vec<O>) -> Vec<O> {
    left.reserve(right.len() + 1);
    left.push(middle);
    left.extend(right);
    left
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_length_counts_links() {
        let right = Tree::leaf(3);
        let id: MapFn<'_, i32, i32> = &|v| *v;

        let done: Continuation<'_, i32, i32> = Continuation::Done;
        assert_eq!(done.len(), 0);
        assert!(done.is_done());

        let next = Continuation::Next {
            right: &right,
            value: &2,
            map: id,
            next: Box::new(Continuation::Done),
        };
        let concat = Continuation::Concat {
            left: vec![0],
            value: &1,
            map: id,
            next: Box::new(next),
        };
        assert_eq!(concat.tag(), ContinuationTag::Concat);
        assert_eq!(concat.len(), 2);
    }

    #[test]
    fn concat_places_middle_between() {
        assert_eq!(concat(vec![1, 2], 3, vec![4, 5]), vec![1, 2, 3, 4, 5]);
        assert_eq!(concat(Vec::new(), 'x', Vec::new()), vec!['x']);
    }
}
