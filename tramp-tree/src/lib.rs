//! A binary search tree whose real subject is its in-order traversal.
//!
//! The same traversal is written five times, each one making more of its execution
//! model explicit: plain recursion, continuation-passing closures, closures built by
//! named constructors, defunctionalized continuation data with an interpreter, and
//! finally that interpreter driven by a trampoline. Only the last one runs in
//! constant native stack space, so it is the only one that survives a degenerate
//! tree thousands of levels deep. An explicit-stack loop computes the same sequence
//! a sixth way, for comparison.
//!
//! ```rust
//! use tramp_tree::{BinaryTree, Strategy};
//!
//! // strictly increasing input: every node has only a right child
//! let tree: BinaryTree<u32> = (0..10_000).collect();
//! assert_eq!(tree.depth(), 10_000);
//!
//! let sorted = tree.traverse_with(Strategy::Thunk, |v| *v);
//! assert_eq!(sorted, (0..10_000).collect::<Vec<_>>());
//! ```

mod binary_tree;
mod continuation;
mod error;
pub mod explicit_stack;
mod insert;
pub mod strategy;
pub mod trampoline;
mod tree;

pub use binary_tree::BinaryTree;
pub use continuation::{Continuation, ContinuationTag, MapFn};
pub use error::{Error, Result};
pub use strategy::Strategy;
pub use trampoline::{Bounce, Suspended};
pub use tree::{Shape, Tree};
