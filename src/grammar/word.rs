//! Bare identifier grammar

use serde::Serialize;

use super::outcome::GrammarResult;
use super::patterns::WORD;

/// A single identifier token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    pub name: String,
}

/// Recognise a line holding one identifier and nothing else (surrounding whitespace allowed).
///
/// This grammar has no error mode: anything that is not a single identifier is `NoMatch`.
pub fn parse_word(source: &str) -> GrammarResult<Word> {
    Ok(WORD.captures(source).map(|caps| Word {
        name: caps["name"].to_string(),
    }))
}
