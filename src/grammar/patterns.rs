//! Regex definitions for the line grammars
//!
//! Patterns are compiled once, on first use. Named capture groups carry the sub-fields each
//! grammar extracts; the grammar modules only read captures and never re-scan the text.

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid grammar pattern {pattern}: {err}"))
}

/// Bare identifier: a letter followed by word characters.
pub(super) static WORD: Lazy<Regex> = Lazy::new(|| compile(r"^\s*(?P<name>[A-Za-z]\w*)\s*$"));

/// A single value token.
pub(super) static VALUE_TOKEN: Lazy<Regex> = Lazy::new(|| compile(r"^\s*(?P<val>\w+)\s*$"));

/// `name : rest` where the name may hold spaces and hyphens (legacy multi-word names).
pub(super) static PROPERTY_HEAD: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*(?P<name>\w[\w \t-]*?)\s*:(?P<rest>.*)$"));

/// `name : rest` with a single-token name.
pub(super) static PROPERTY_STRICT_HEAD: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*(?P<name>\w+)\s*:(?P<rest>.*)$"));

/// `v1, v2, ...` with optional space around each comma.
pub(super) static VALUE_LIST: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*\w+(?:\s*,\s*\w+)*\s*$"));

/// Outer shape of a block tag: anything between one pair of angle brackets.
pub(super) static BLOCK_TAG_SHAPE: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*<(?P<inner>.*)>\s*$"));

/// Inner content of a block tag: optional `/` then a word token, no whitespace.
pub(super) static BLOCK_TAG_INNER: Lazy<Regex> =
    Lazy::new(|| compile(r"^(?P<close>/)?(?P<name>\w+)$"));

/// Cheap limitation pre-check: keyword, then something holding `:` or `=`.
pub(super) static LIMITATION_HINT: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*(?:add|set|rm)\s+.*[:=]"));

/// Full limitation: `add|set|rm name (:|=) value`.
pub(super) static LIMITATION: Lazy<Regex> = Lazy::new(|| {
    compile(r"^\s*(?P<keyword>add|set|rm)\s+(?P<name>\w+)\s*[:=]\s*(?P<val>\w+)\s*$")
});

/// Leading `range` keyword in its accepted spellings (`range`, `add range`, `add_range`,
/// `add-range`, `addrange`), followed by whitespace, a colon or the end of the line.
pub(super) static RANGE_KEYWORD: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*(?:add[\s_-]*)?range(?:\s*:\s*|\s+|$)(?P<rest>.*)$"));

/// `start..end` followed by whatever qualifiers remain.
pub(super) static RANGE_BOUNDS: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*(?P<start>\w+)\s*\.\.\s*(?P<end>\w+)(?P<tail>.*)$"));

/// Tag qualifier, leaving the bus interface qualifier (if any) in `rest`.
pub(super) static RANGE_TAGS: Lazy<Regex> = Lazy::new(|| {
    compile(r"^\s*(?:(?:with|using)\s+|:\s*)(?P<tags>\w+(?:\s*,\s*\w+)*)(?P<rest>(?:\s.*)?)$")
});

/// Bus interface qualifier.
pub(super) static RANGE_BUS_INTERFACES: Lazy<Regex> = Lazy::new(|| {
    compile(r"^\s*(?P<polarity>for|notfor)\s+(?P<bifs>\w+(?:\s*,\s*\w+)*)\s*$")
});

/// A double-quoted literal spanning the whole (trimmed) line.
pub(super) static QUOTED: Lazy<Regex> = Lazy::new(|| compile(r#"^"(?P<inner>.*)"$"#));

/// Outer shape of a method call: identifier, then everything between the first `(` and the
/// final `)`.
pub(super) static METHOD_CALL: Lazy<Regex> =
    Lazy::new(|| compile(r"^\s*(?P<name>[A-Za-z]\w*)\s*\((?P<args>.*)\)\s*$"));

/// Split a comma separated token list into trimmed items.
pub(super) fn split_list(list: &str) -> Vec<String> {
    list.split(',').map(|item| item.trim().to_string()).collect()
}
