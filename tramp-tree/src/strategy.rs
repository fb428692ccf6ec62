//! Five implementations of the same in-order traversal.
//!
//! Each submodule exposes `inorder(root, map)` and nothing else is shared between
//! them beyond [`Tree`] and [`Continuation`](crate::Continuation). They differ only
//! in how "the rest of the traversal" is represented while a subtree is visited:
//!
//! - [`naive`]: the native call stack.
//! - [`cps`]: boxed closures, built inline.
//! - [`explicit`]: boxed closures, built by named constructors.
//! - [`apply`]: continuation data plus an interpreter, still mutually recursive.
//! - [`thunk`]: continuation data plus an interpreter, driven by a trampoline.
//!
//! Only `thunk` is safe on trees of arbitrary depth. The other four recurse once per
//! level and will exhaust the native stack on a deep enough (e.g. degenerate) tree.

pub mod apply;
pub mod cps;
pub mod explicit;
pub mod naive;
pub mod thunk;

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::continuation::MapFn;
use crate::error::Error;
use crate::tree::Tree;

/// Which traversal to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    Naive,
    Cps,
    Explicit,
    Apply,
    #[default]
    Thunk,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Naive,
        Strategy::Cps,
        Strategy::Explicit,
        Strategy::Apply,
        Strategy::Thunk,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Naive => "naive",
            Strategy::Cps => "cps",
            Strategy::Explicit => "explicit",
            Strategy::Apply => "apply",
            Strategy::Thunk => "thunk",
        }
    }

    /// Whether this strategy keeps native stack use constant regardless of tree depth.
    pub fn is_stack_safe(self) -> bool {
        matches!(self, Strategy::Thunk)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| Error::InvalidStrategy(s.to_string()))
    }
}

/// Run `strategy` over `root`, returning `map(v)` for every stored `v` in ascending order.
pub fn traverse<V, O>(root: &Tree<V>, strategy: Strategy, map: MapFn<'_, V, O>) -> Vec<O> {
    debug!(target: "tramp_tree::strategy", %strategy, "traverse");
    match strategy {
        Strategy::Naive => naive::inorder(root, map),
        Strategy::Cps => cps::inorder(root, map),
        Strategy::Explicit => explicit::inorder(root, map),
        Strategy::Apply => apply::inorder(root, map),
        Strategy::Thunk => thunk::inorder(root, map),
    }
}
