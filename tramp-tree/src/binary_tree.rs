use std::fmt;
use std::mem;
use std::rc::Rc;

use tracing::debug;

use crate::error::Result;
use crate::explicit_stack;
use crate::insert;
use crate::strategy::{self, Strategy};
use crate::tree::{teardown, Tree};

/// An unbalanced binary search tree that owns one root.
///
/// Values go in through [`insert`](BinaryTree::insert) (persistent: the old root is
/// left intact and shares everything off the insertion path with the new one) or
/// [`insert_in_place`](BinaryTree::insert_in_place) (rewrites the insertion path).
/// Either way, equal values are kept, each in the right subtree of the previous.
///
/// ```rust
/// use tramp_tree::{BinaryTree, Strategy};
///
/// let mut tree = BinaryTree::new();
/// for v in [2, 1, 0, 3, 4] {
///     tree.insert(v);
/// }
///
/// assert_eq!(tree.traverse_with(Strategy::Naive, |v| *v), vec![0, 1, 2, 3, 4]);
/// assert_eq!(tree.traverse(|v| v * 10), vec![0, 10, 20, 30, 40]);
/// assert!(tree.traverse_by_name("bogus", |v| *v).is_err());
/// ```
pub struct BinaryTree<V> {
    root: Rc<Tree<V>>,
    len: usize,
}

impl<V> BinaryTree<V> {
    pub fn new() -> Self {
        Self {
            root: Rc::new(Tree::Empty),
            len: 0,
        }
    }

    pub fn root(&self) -> &Tree<V> {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// A second handle on the current contents. O(1): the two share every node.
    ///
    /// Later insertions into either handle are never visible through the other.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// `map(v)` for every stored `v`, in ascending order, using the default
    /// (stack safe) strategy.
    pub fn traverse<O>(&self, map: impl Fn(&V) -> O) -> Vec<O> {
        self.traverse_with(Strategy::default(), map)
    }

    /// `map(v)` for every stored `v`, in ascending order, using `strategy`.
    ///
    /// Every strategy other than [`Strategy::Thunk`] recurses once per tree level and
    /// can overflow the native stack on deep trees.
    pub fn traverse_with<O>(&self, strategy: Strategy, map: impl Fn(&V) -> O) -> Vec<O> {
        debug!(target: "tramp_tree::binary_tree", %strategy, len = self.len, "traverse");
        strategy::traverse(&self.root, strategy, &map)
    }

    /// Like [`traverse_with`](BinaryTree::traverse_with), with the strategy given by
    /// name (`naive`, `cps`, `explicit`, `apply` or `thunk`).
    pub fn traverse_by_name<O>(&self, strategy: &str, map: impl Fn(&V) -> O) -> Result<Vec<O>> {
        let strategy = strategy.parse()?;
        Ok(self.traverse_with(strategy, map))
    }

    /// The same in-order sequence, computed by an iterative loop over an explicit
    /// stack of pending right subtrees.
    pub fn traverse_explicit_stack<O>(&self, map: impl Fn(&V) -> O) -> Vec<O> {
        explicit_stack::inorder(self.root(), &map)
    }

    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.traverse(V::clone)
    }
}

impl<V: Ord + Clone> BinaryTree<V> {
    /// Persistent insertion: builds a new root and replaces the stored one with it.
    pub fn insert(&mut self, value: V) {
        let rebuilt = insert::insert(&self.root, value);
        // the replaced path is usually owned by nothing else now
        teardown(mem::replace(&mut self.root, rebuilt));
        self.len += 1;
    }

    /// Iterative insertion that rewrites the insertion path in place.
    ///
    /// Nodes still shared with a [`snapshot`](BinaryTree::snapshot) are copied before
    /// being rewritten, so snapshots keep their contents.
    pub fn insert_in_place(&mut self, value: V) {
        insert::insert_in_place(&mut self.root, value);
        self.len += 1;
    }
}

// shares the root, so no `V: Clone` bound
impl<V> Clone for BinaryTree<V> {
    fn clone(&self) -> Self {
        Self {
            root: Rc::clone(&self.root),
            len: self.len,
        }
    }
}

impl<V> Default for BinaryTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Ord + Clone> Extend<V> for BinaryTree<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.insert_in_place(value);
        }
    }
}

impl<V: Ord + Clone> FromIterator<V> for BinaryTree<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<V: fmt::Debug> fmt::Debug for BinaryTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the values in order rather than the nested nodes, which would recurse per level
        f.debug_struct("BinaryTree")
            .field("len", &self.len)
            .field("values", &explicit_stack::inorder(self.root(), &|v| v))
            .finish()
    }
}

impl<V> Drop for BinaryTree<V> {
    fn drop(&mut self) {
        teardown(mem::replace(&mut self.root, Rc::new(Tree::Empty)));
    }
}
