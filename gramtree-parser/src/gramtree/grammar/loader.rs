//! Grammar file loader
//!
//! Parses the textual rule format into a [`Grammar`]:
//!
//!     E -> T + E | T
//!     T -> 1 | 2
//!
//! One rule per line, alternatives separated by `|`, symbols separated by
//! whitespace. Lines without `->` (and blank lines) are skipped silently so
//! grammar files can carry comments. Whitespace around `->`, `|`, and symbols
//! is insignificant.

use super::model::{Grammar, Production};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Matches a rule line and captures its two sides. The left-hand side must be
/// a single non-empty symbol; anything else is not a rule line.
static RULE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?P<lhs>\S+)\s*->\s*(?P<rhs>.*)$").unwrap());

/// Errors raised while constructing a grammar. These are fatal
/// configuration-time failures, distinct from per-input parse outcomes.
#[derive(Debug)]
pub enum GrammarError {
    /// The grammar file could not be read.
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The source text contained no rule lines at all.
    Empty,
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::Unreadable { path, source } => {
                write!(f, "cannot read grammar file '{}': {}", path.display(), source)
            }
            GrammarError::Empty => write!(f, "grammar contains no rules"),
        }
    }
}

impl std::error::Error for GrammarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrammarError::Unreadable { source, .. } => Some(source),
            GrammarError::Empty => None,
        }
    }
}

/// Parse grammar source text into a [`Grammar`].
///
/// Rule lines split into one entry per alternative; repeated left-hand sides
/// accumulate in encounter order. An alternative with no symbols (e.g. a
/// trailing `|`) is normalized to the explicit ε production.
pub fn parse_grammar(source: &str) -> Result<Grammar, GrammarError> {
    let mut entries = Vec::new();

    for line in source.lines() {
        let Some(captures) = RULE_LINE.captures(line) else {
            continue;
        };
        let lhs = &captures["lhs"];
        for alternative in captures["rhs"].split('|') {
            let symbols = alternative
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>();
            entries.push((lhs.to_string(), Production::new(symbols)));
        }
    }

    if entries.is_empty() {
        return Err(GrammarError::Empty);
    }

    Ok(Grammar::from_entries(entries))
}

/// Read and parse a grammar file.
pub fn load_grammar(path: impl AsRef<Path>) -> Result<Grammar, GrammarError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| GrammarError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_grammar(&source)
}
