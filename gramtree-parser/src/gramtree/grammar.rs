//! Grammar model and loading
//!
//! A grammar maps non-terminal symbols to ordered lists of productions. Order
//! is significant twice over: productions are attempted in declaration order
//! during derivation, and non-terminals are displayed in the order they first
//! appeared. The model is immutable once built; the engine only ever reads it.
//!
//! The loader consumes the textual rule format (`LHS -> alt1 | alt2`) and is
//! deliberately lenient: lines that don't look like rules are skipped, which
//! lets grammar files carry comments and blank separators.

pub mod loader;
pub mod model;

pub use loader::{load_grammar, parse_grammar, GrammarError};
pub use model::{Grammar, Production, EPSILON};
