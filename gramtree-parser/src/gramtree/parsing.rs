//! Derivation engine and its artifacts
//!
//! The derivation pipeline from tokens to artifacts:
//!
//!     Derivation (engine):
//!         A depth-first backtracking search over the grammar. Productions
//!         are attempted in declaration order; the first alternative whose
//!         symbols all match wins and no later alternative is revisited.
//!         Every negative outcome is a normal no-match value, never an
//!         error or panic.
//!
//!     Trace (trace):
//!         One append-only log across the whole search, interleaving entries
//!         from all recursion depths in the order attempts happened. This is
//!         the primary observability artifact; failed attempts are recorded
//!         just like successful ones.
//!
//!     Tree (tree):
//!         Owned parse-tree nodes built bottom-up. Subtrees of abandoned
//!         alternatives are dropped before the next alternative is tried and
//!         can never leak into the final tree.

pub mod engine;
pub mod trace;
pub mod tree;

pub use engine::{Analysis, Deriver, EngineError, Verdict};
pub use trace::{Outcome, TraceEntry};
pub use tree::ParseNode;
