//! Derivation trace entries
//!
//! Each entry records one decision point: which production is being
//! attempted, a terminal match or mismatch, an accepted empty production, or
//! a failed sub-derivation. The depth is the recursion level at emission time
//! and is used purely for indentation when rendering.

use serde::Serialize;
use std::fmt;

/// What kind of decision an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    /// A production is about to be walked.
    Attempt,
    /// An ε symbol matched zero tokens.
    EmptyAccepted,
    /// A terminal symbol matched the token at the cursor.
    TerminalMatched,
    /// A terminal symbol did not match (or the input was exhausted).
    TerminalMismatch,
    /// A non-terminal's sub-derivation found no production that matched.
    RuleFailed,
    /// The derivation depth cap was hit while expanding a symbol.
    DepthLimit,
}

impl Outcome {
    /// Marker glyph prefixed to rendered messages. Attempts carry none.
    fn marker(&self) -> &'static str {
        match self {
            Outcome::Attempt => "",
            Outcome::EmptyAccepted | Outcome::TerminalMatched => "✔ ",
            Outcome::TerminalMismatch => "✘ ",
            Outcome::RuleFailed => "❌ ",
            Outcome::DepthLimit => "⚠ ",
        }
    }
}

/// One record in the derivation trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub depth: usize,
    pub outcome: Outcome,
    pub message: String,
}

impl TraceEntry {
    pub fn attempt(depth: usize, symbol: &str, production: impl fmt::Display) -> Self {
        Self {
            depth,
            outcome: Outcome::Attempt,
            message: format!("Attempting {} -> {}", symbol, production),
        }
    }

    pub fn empty_accepted(depth: usize) -> Self {
        Self {
            depth,
            outcome: Outcome::EmptyAccepted,
            message: "Empty production accepted".to_string(),
        }
    }

    pub fn terminal_matched(depth: usize, expected: &str, found: &str) -> Self {
        Self {
            depth,
            outcome: Outcome::TerminalMatched,
            message: format!("Terminal '{}' matched '{}'", expected, found),
        }
    }

    pub fn terminal_mismatch(depth: usize, expected: &str, found: &str) -> Self {
        Self {
            depth,
            outcome: Outcome::TerminalMismatch,
            message: format!(
                "Terminal '{}' did not match (expected '{}', found '{}')",
                expected, expected, found
            ),
        }
    }

    pub fn rule_failed(depth: usize, symbol: &str) -> Self {
        Self {
            depth,
            outcome: Outcome::RuleFailed,
            message: format!("Failed in {}", symbol),
        }
    }

    pub fn depth_limit(depth: usize, symbol: &str, limit: usize) -> Self {
        Self {
            depth,
            outcome: Outcome::DepthLimit,
            message: format!(
                "Derivation depth limit of {} reached while expanding {}",
                limit, symbol
            ),
        }
    }

    /// Render with a caller-chosen indentation unit per depth level.
    pub fn render(&self, indent_unit: &str) -> String {
        format!(
            "{}{}{}",
            indent_unit.repeat(self.depth),
            self.outcome.marker(),
            self.message
        )
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render("  "))
    }
}
