//! Error types for grammar recognition

use std::fmt;

/// Reasons a line that was claimed by a grammar failed to conform to it.
///
/// The `Display` text is the diagnostic exposed as `error_text` on the parser record; every
/// variant names the offending fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// Property value is not a single token
    ExpectedValue { got: String },
    /// Property list value is not a comma separated token list
    ExpectedValueList { got: String },
    /// Angle brackets present, content not `/?word`
    MalformedBlockTag(String),
    /// Well-formed block tag outside the known vocabulary
    UnknownBlockTag(String),
    /// Line starts with a limitation keyword but is not `name : value`
    BadLimitation(String),
    /// Text after the `range` keyword is not `start..end`
    MalformedRange(String),
    /// Range bound is not an unsigned integer
    NonNumeric(String),
    /// Range start is greater than its end
    ReversedRange { start: u64, end: u64 },
    /// Text after the range is not a tag qualifier
    MalformedTags(String),
    /// Text after the tags is not a bus interface qualifier
    MalformedBusInterfaces(String),
    /// Bus interface list names the same interface twice
    DuplicateBusInterfaces(String),
    /// Quoted text is not a valid match pattern
    InvalidPattern { pattern: String, reason: String },
    /// Close parenthesis at argument level; carries the text up to it
    UnexpectedCloseParen(String),
    /// Parentheses or quotes left open at the end of the argument list
    MismatchedDelimiters(String),
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::ExpectedValue { got } => {
                write!(f, "expected <value> but got '{}'", got)
            }
            GrammarError::ExpectedValueList { got } => {
                write!(f, "expected <value>[,<value>*] but got '{}'", got)
            }
            GrammarError::MalformedBlockTag(text) => write!(f, "Malformed blocktag '{}'", text),
            GrammarError::UnknownBlockTag(name) => write!(f, "Unknown blocktag '{}'", name),
            GrammarError::BadLimitation(line) => write!(
                f,
                "Bad syntax in limitation '{}', should be add|set|rm name : value",
                line
            ),
            GrammarError::MalformedRange(text) => {
                write!(f, "Malformed address range '{}', should be start..end", text)
            }
            GrammarError::NonNumeric(text) => {
                write!(f, "Non-numeric value '{}' in address range", text)
            }
            GrammarError::ReversedRange { start, end } => {
                write!(f, "Reversed address range {:#x}..{:#x}", start, end)
            }
            GrammarError::MalformedTags(text) => write!(
                f,
                "Malformed tag list '{}', should be (with|:|using) tag[, tag]*",
                text
            ),
            GrammarError::MalformedBusInterfaces(text) => write!(
                f,
                "Malformed bus interface list '{}', should be (for|notfor) bif[, bif]*",
                text
            ),
            GrammarError::DuplicateBusInterfaces(text) => {
                write!(f, "Bus interface list '{}' contains identical items", text)
            }
            GrammarError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid string match pattern '{}': {}", pattern, reason)
            }
            GrammarError::UnexpectedCloseParen(prefix) => {
                write!(f, "unexpected close-parenthesis in '{}'", prefix)
            }
            GrammarError::MismatchedDelimiters(text) => {
                write!(f, "Mismatched parentheses or quotes in '{}'", text)
            }
        }
    }
}

impl std::error::Error for GrammarError {}
