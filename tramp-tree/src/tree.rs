use std::rc::Rc;

/// A binary search tree over values of type `V`.
///
/// Children are reference counted: persistent insertion rebuilds only the path it
/// touches and shares every other subtree with the tree it was derived from.
///
/// For every `Node(left, v, right)`, all values under `left` are `< v` and all
/// values under `right` are `>= v`. Equal values therefore always land on the right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tree<V> {
    Empty,
    Leaf(V),
    Node(Rc<Tree<V>>, V, Rc<Tree<V>>),
}

/// The three shapes a [`Tree`] can take, without the data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Empty,
    Leaf,
    Internal,
}

impl<V> Tree<V> {
    pub fn leaf(value: V) -> Self {
        Tree::Leaf(value)
    }

    pub fn node(left: Tree<V>, value: V, right: Tree<V>) -> Self {
        Tree::Node(Rc::new(left), value, Rc::new(right))
    }

    pub fn shape(&self) -> Shape {
        match self {
            Tree::Empty => Shape::Empty,
            Tree::Leaf(_) => Shape::Leaf,
            Tree::Node(..) => Shape::Internal,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Tree::Empty)
    }

    /// Number of values stored in this tree. Walks the tree with an explicit stack.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut todo = vec![self];
        while let Some(tree) = todo.pop() {
            match tree {
                Tree::Empty => {}
                Tree::Leaf(_) => count += 1,
                Tree::Node(left, _, right) => {
                    count += 1;
                    todo.push(&**left);
                    todo.push(&**right);
                }
            }
        }
        count
    }

    /// Length of the longest root-to-value path, `0` for the empty tree.
    ///
    /// A degenerate tree built from `n` strictly increasing values has depth `n`.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut todo = vec![(self, 0)];
        while let Some((tree, above)) = todo.pop() {
            match tree {
                Tree::Empty => deepest = deepest.max(above),
                Tree::Leaf(_) => deepest = deepest.max(above + 1),
                Tree::Node(left, _, right) => {
                    todo.push((&**left, above + 1));
                    todo.push((&**right, above + 1));
                }
            }
        }
        deepest
    }
}

/// Drop `link` without recursing once per level, as the derived drop glue would.
///
/// Subtrees still referenced from elsewhere only lose one reference.
pub(crate) fn teardown<V>(link: Rc<Tree<V>>) {
    let mut links = vec![link];
    while let Some(link) = links.pop() {
        if let Ok(Tree::Node(left, _, right)) = Rc::try_unwrap(link) {
            links.push(left);
            links.push(right);
        }
    }
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Tree::Empty
    }
}
