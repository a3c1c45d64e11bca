//! Three-way outcome of a parse attempt

use serde::Serialize;
use std::fmt;

use super::error::GrammarError;

/// Result of a single grammar applied to a single line.
///
/// - `Ok(None)` - the grammar does not apply (`NoMatch`)
/// - `Ok(Some(value))` - fully parsed
/// - `Err(error)` - recognised but malformed
pub type GrammarResult<T> = Result<Option<T>, GrammarError>;

/// Outcome of the most recent parse attempt on a [LineParser](super::LineParser).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    NoMatch,
    Error,
    Ok,
}

impl Outcome {
    /// Classify a grammar result without consuming it.
    pub fn of<T>(result: &GrammarResult<T>) -> Self {
        match result {
            Ok(None) => Outcome::NoMatch,
            Ok(Some(_)) => Outcome::Ok,
            Err(_) => Outcome::Error,
        }
    }

    /// True for `Ok` and `Error`, the outcomes that stop a dispatch loop.
    pub fn is_decisive(self) -> bool {
        !matches!(self, Outcome::NoMatch)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::NoMatch => "no-match",
            Outcome::Error => "error",
            Outcome::Ok => "ok",
        };
        f.write_str(text)
    }
}
