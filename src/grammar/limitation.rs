//! Limitation grammar: `add|set|rm name (:|=) value`

use serde::Serialize;
use std::fmt;

use super::error::GrammarError;
use super::outcome::GrammarResult;
use super::patterns::{LIMITATION, LIMITATION_HINT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LimitationKeyword {
    Add,
    Set,
    Rm,
}

impl LimitationKeyword {
    fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "add" => Some(LimitationKeyword::Add),
            "set" => Some(LimitationKeyword::Set),
            "rm" => Some(LimitationKeyword::Rm),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LimitationKeyword::Add => "add",
            LimitationKeyword::Set => "set",
            LimitationKeyword::Rm => "rm",
        }
    }
}

impl fmt::Display for LimitationKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Limitation {
    pub keyword: LimitationKeyword,
    pub name: String,
    pub val: String,
}

/// Recognise a limitation directive.
///
/// A line is only claimed when it starts with a keyword and holds a `:` or `=` somewhere,
/// so plain lines that happen to start with `add` stay `NoMatch`. Past that point anything
/// other than `keyword name : value` is an error.
pub fn parse_limitation(source: &str) -> GrammarResult<Limitation> {
    if !LIMITATION_HINT.is_match(source) {
        return Ok(None);
    }
    let bad_syntax = || GrammarError::BadLimitation(source.trim().to_string());
    let caps = LIMITATION.captures(source).ok_or_else(bad_syntax)?;
    let keyword = LimitationKeyword::from_literal(&caps["keyword"]).ok_or_else(bad_syntax)?;

    Ok(Some(Limitation {
        keyword,
        name: caps["name"].to_string(),
        val: caps["val"].to_string(),
    }))
}
