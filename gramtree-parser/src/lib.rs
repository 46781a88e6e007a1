//! # gramtree-parser
//!
//! A backtracking derivation engine for user-supplied context-free grammars.
//!
//! Given a grammar and an input string, the engine attempts to derive the
//! string by recursive descent with backtracking, trying productions in
//! declaration order and keeping the first alternative that completes. Every
//! attempt is recorded, so alongside the parse tree the caller gets a full
//! derivation trace of what was tried, where it matched, and where it failed.
//!
//! The crate is organized around that flow:
//!
//! src/gramtree
//!   ├── grammar     Grammar model and the `LHS -> alt | alt` file loader
//!   ├── lexing      Input-string tokenization (one token per character)
//!   ├── parsing     The derivation engine, trace entries, and parse trees
//!   ├── pipeline    Tokenize-then-derive facade producing per-input reports
//!   └── formats     Tree renderers (treeviz text layout, Graphviz DOT)

pub mod gramtree;

pub use gramtree::grammar::{load_grammar, parse_grammar, Grammar, GrammarError, Production, EPSILON};
pub use gramtree::lexing::tokenize;
pub use gramtree::parsing::{Analysis, Deriver, EngineError, Outcome, ParseNode, TraceEntry, Verdict};
pub use gramtree::pipeline::{DeriveOptions, Pipeline, Report};
