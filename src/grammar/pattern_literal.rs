//! Quoted match pattern grammar

use regex::Regex;
use serde::Serialize;

use super::error::GrammarError;
use super::outcome::GrammarResult;
use super::patterns::QUOTED;

/// A double-quoted match pattern, stored without its quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternLiteral {
    pub pattern: String,
}

impl PatternLiteral {
    /// Compile the pattern. Cannot fail for a value produced by [parse_pattern_literal].
    pub fn compile(&self) -> Result<Regex, regex::Error> {
        Regex::new(&self.pattern)
    }
}

/// Recognise a quoted pattern and check that it is a legal match pattern.
///
/// The inner text is compiled and applied to an empty string; a compile failure becomes an
/// `Error` outcome carrying the compiler's reason.
pub fn parse_pattern_literal(source: &str) -> GrammarResult<PatternLiteral> {
    let Some(caps) = QUOTED.captures(source.trim()) else {
        return Ok(None);
    };
    let pattern = caps["inner"].to_string();

    match Regex::new(&pattern).map(|probe| probe.is_match("")) {
        Ok(_) => Ok(Some(PatternLiteral { pattern })),
        Err(err) => Err(GrammarError::InvalidPattern {
            pattern,
            reason: summary_line(&err.to_string()),
        }),
    }
}

/// regex errors render as multi-line reports; the summary is on the last line.
fn summary_line(report: &str) -> String {
    report
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(report)
        .to_string()
}
