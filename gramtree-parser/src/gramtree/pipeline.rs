//! Processing pipeline for input strings
//!
//! Ties tokenization to derivation: an input string is tokenized into one
//! terminal per non-space character, then analyzed against the configured
//! start symbol. The grammar is read-only, so one pipeline can process any
//! number of inputs.

use crate::gramtree::grammar::Grammar;
use crate::gramtree::lexing;
use crate::gramtree::parsing::engine::{Analysis, Deriver, EngineError, DEFAULT_MAX_DEPTH};
use serde::Serialize;

/// Knobs for one derivation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeriveOptions {
    pub start_symbol: String,
    pub max_depth: usize,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            start_symbol: "E".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Everything one input produced: its token sequence and the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub tokens: Vec<String>,
    pub analysis: Analysis,
}

/// The core processing pipeline.
///
/// Owns the grammar and derivation options; [`Pipeline::run`] executes the
/// complete tokenize-then-derive sequence for one input string.
pub struct Pipeline {
    grammar: Grammar,
    options: DeriveOptions,
}

impl Pipeline {
    pub fn new(grammar: Grammar, options: DeriveOptions) -> Self {
        Self { grammar, options }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Tokenize and analyze one input string.
    ///
    /// Parse failures come back inside the report as verdicts; `Err` is
    /// reserved for fatal call errors such as an unknown start symbol.
    pub fn run(&self, input: &str) -> Result<Report, EngineError> {
        let tokens = lexing::tokenize(input);
        let deriver = Deriver::new(&self.grammar).with_max_depth(self.options.max_depth);
        let analysis = deriver.analyze(&self.options.start_symbol, &tokens)?;
        Ok(Report { tokens, analysis })
    }
}
