//! Backtracking derivation engine
//!
//! A naive exhaustive backtracker, on purpose: for each non-terminal the
//! productions are tried in declaration order, each production's symbols are
//! walked left to right, and the first production that completes wins. There
//! is no re-derivation of sibling alternatives after a production completes,
//! even when that local choice later causes the overall match to fall short.
//! Identical grammar and input always produce identical trees and traces.
//!
//! Every recursion level owns its tentative node and trace fragment until it
//! returns them to its caller; abandoned alternatives are dropped wholesale.
//! Failure is a value here; nothing in the search path panics or raises.
//!
//! Left-recursive grammars would recurse forever, so the deriver carries a
//! depth cap. Hitting it fails the branch with a distinct trace entry and
//! surfaces as [`Verdict::DepthLimit`] rather than a plain rejection.

use super::trace::TraceEntry;
use super::tree::ParseNode;
use crate::gramtree::grammar::{Grammar, EPSILON};
use serde::Serialize;
use std::fmt;

/// Depth cap applied when none is configured.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Fatal call-time errors, distinct from per-input parse outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The requested start symbol has no productions in the grammar.
    UnknownStartSymbol(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownStartSymbol(symbol) => {
                write!(f, "start symbol '{}' is not defined in the grammar", symbol)
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Overall outcome of analyzing one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// A derivation exists and consumed the whole token sequence.
    Accepted,
    /// A derivation exists but matched only a prefix of the input.
    Incomplete,
    /// No production of the start symbol derived the input.
    NoDerivation,
    /// The search was cut off by the derivation depth cap.
    DepthLimit,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "the string belongs to the grammar"),
            Verdict::Incomplete => {
                write!(f, "a derivation matched only a prefix of the input")
            }
            Verdict::NoDerivation => write!(f, "the string does not belong to the grammar"),
            Verdict::DepthLimit => write!(f, "the derivation depth limit was exceeded"),
        }
    }
}

/// Everything one analysis produced: the tree (if any), the position reached,
/// the full trace, and the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub tree: Option<ParseNode>,
    pub end: usize,
    pub trace: Vec<TraceEntry>,
    pub verdict: Verdict,
}

/// Result of one recursion level. The tree is `None` when no production of
/// the symbol matched; `truncated` records that the depth cap fired somewhere
/// below this level.
struct Step {
    tree: Option<ParseNode>,
    end: usize,
    steps: Vec<TraceEntry>,
    truncated: bool,
}

impl Step {
    fn no_match(end: usize, steps: Vec<TraceEntry>, truncated: bool) -> Self {
        Self {
            tree: None,
            end,
            steps,
            truncated,
        }
    }
}

/// The backtracking deriver for one immutable grammar.
///
/// Holds no mutable state across calls; independent inputs may be derived
/// against the same grammar from multiple threads.
pub struct Deriver<'g> {
    grammar: &'g Grammar,
    max_depth: usize,
}

impl<'g> Deriver<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Derive `tokens` from `symbol`.
    ///
    /// Returns the parse tree (or `None` when no production matched), the
    /// position reached, and the ordered trace of every attempt. A symbol
    /// with no productions (a terminal) yields a no-match with an empty
    /// trace, mirroring the grammar lookup distinction.
    ///
    /// Note that a `Some` tree alone is not acceptance: the derivation may
    /// have consumed only a prefix. Use [`Deriver::analyze`] for the
    /// full-consumption boundary check.
    pub fn derive(&self, symbol: &str, tokens: &[String]) -> (Option<ParseNode>, usize, Vec<TraceEntry>) {
        let step = self.derive_at(symbol, tokens, 0, 0);
        (step.tree, step.end, step.steps)
    }

    /// Analyze one token sequence against a start symbol.
    ///
    /// This is the caller-side boundary on top of [`Deriver::derive`]:
    /// acceptance requires both a derivation of the start symbol and an end
    /// position equal to the full token count. A derivation that stops short
    /// is reported as [`Verdict::Incomplete`] even though `derive` itself
    /// returned a tree.
    ///
    /// A start symbol absent from the grammar is a fatal call error, not a
    /// parse failure.
    pub fn analyze(&self, start: &str, tokens: &[String]) -> Result<Analysis, EngineError> {
        if !self.grammar.is_nonterminal(start) {
            return Err(EngineError::UnknownStartSymbol(start.to_string()));
        }

        let step = self.derive_at(start, tokens, 0, 0);
        let verdict = match &step.tree {
            Some(_) if step.end == tokens.len() => Verdict::Accepted,
            Some(_) => Verdict::Incomplete,
            None if step.truncated => Verdict::DepthLimit,
            None => Verdict::NoDerivation,
        };

        Ok(Analysis {
            tree: step.tree,
            end: step.end,
            trace: step.steps,
            verdict,
        })
    }

    /// One recursion level: try every production of `symbol` at `pos`.
    fn derive_at(&self, symbol: &str, tokens: &[String], pos: usize, depth: usize) -> Step {
        // Bounds guard, not a mismatch: a cursor past the end can never match
        // anything, so fail without logging an attempt.
        if pos > tokens.len() {
            return Step::no_match(pos, Vec::new(), false);
        }

        if depth > self.max_depth {
            let entry = TraceEntry::depth_limit(depth, symbol, self.max_depth);
            return Step::no_match(pos, vec![entry], true);
        }

        let productions = self.grammar.productions(symbol).unwrap_or_default();
        let mut steps = Vec::new();
        let mut truncated = false;

        for production in productions {
            steps.push(TraceEntry::attempt(depth, symbol, production));
            let mut node = ParseNode::new(symbol);
            let mut cursor = pos;
            let mut matched = true;

            for sym in production.symbols() {
                if sym == EPSILON {
                    steps.push(TraceEntry::empty_accepted(depth + 1));
                    continue;
                }

                if self.grammar.is_nonterminal(sym) {
                    let child = self.derive_at(sym, tokens, cursor, depth + 1);
                    truncated |= child.truncated;
                    // Sub-attempts are observable whether or not they matched.
                    steps.extend(child.steps);
                    match child.tree {
                        Some(subtree) => {
                            node.push(subtree);
                            cursor = child.end;
                        }
                        None => {
                            steps.push(TraceEntry::rule_failed(depth + 1, sym));
                            matched = false;
                            break;
                        }
                    }
                } else if cursor < tokens.len() && tokens[cursor] == *sym {
                    node.push(ParseNode::new(sym));
                    steps.push(TraceEntry::terminal_matched(depth + 1, sym, &tokens[cursor]));
                    cursor += 1;
                } else {
                    let found = tokens.get(cursor).map(String::as_str).unwrap_or("EOF");
                    steps.push(TraceEntry::terminal_mismatch(depth + 1, sym, found));
                    matched = false;
                    break;
                }
            }

            if matched {
                // First successful alternative wins; later productions are
                // never tried, even when this match leaves trailing input.
                return Step {
                    tree: Some(node),
                    end: cursor,
                    steps,
                    truncated,
                };
            }
            // The tentative node and its children are dropped here.
        }

        Step::no_match(pos, steps, truncated)
    }
}
