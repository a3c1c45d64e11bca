//! Parser record and ordered dispatch
//!
//! [LineParser] holds the state a caller reads after a parse attempt: the active kind, the
//! outcome, the diagnostic and the grammar payload. Every [LineParser::parse] call first
//! resets outcome and diagnostic, then runs the grammar selected by the kind. Grammars are
//! pure functions, so nothing from an earlier call leaks into the next one.

use serde::Serialize;
use tracing::{debug, trace};

use super::address_range::{parse_address_range, AddressRange};
use super::block_tag::{parse_block_tag, BlockTagLine};
use super::error::GrammarError;
use super::kind::{BlockTag, ParserKind};
use super::limitation::{parse_limitation, Limitation};
use super::method_call::{parse_method_call, MethodCall};
use super::outcome::{GrammarResult, Outcome};
use super::pattern_literal::{parse_pattern_literal, PatternLiteral};
use super::property::{
    parse_property, parse_property_any_value, parse_property_list, Property, PropertyList,
};
use super::word::{parse_word, Word};

/// Payload of a successful parse, one variant per grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Parsed {
    Word(Word),
    Property(Property),
    PropertyAnyValue(Property),
    PropertyList(PropertyList),
    BlockTag(BlockTagLine),
    Limitation(Limitation),
    AddressRange(AddressRange),
    PatternLiteral(PatternLiteral),
    MethodCall(MethodCall),
}

impl Parsed {
    pub fn kind(&self) -> ParserKind {
        match self {
            Parsed::Word(_) => ParserKind::Word,
            Parsed::Property(_) => ParserKind::Property,
            Parsed::PropertyAnyValue(_) => ParserKind::PropertyAnyValue,
            Parsed::PropertyList(_) => ParserKind::PropertyList,
            Parsed::BlockTag(_) => ParserKind::BlockTag,
            Parsed::Limitation(_) => ParserKind::Limitation,
            Parsed::AddressRange(_) => ParserKind::AddressRange,
            Parsed::PatternLiteral(_) => ParserKind::PatternLiteral,
            Parsed::MethodCall(_) => ParserKind::MethodCall,
        }
    }
}

fn lift<T>(result: GrammarResult<T>, wrap: fn(T) -> Parsed) -> GrammarResult<Parsed> {
    result.map(|parsed| parsed.map(wrap))
}

/// Run the grammar selected by `kind` against `source`.
///
/// `Unknown` selects no grammar and never matches.
pub fn run_grammar(kind: ParserKind, source: &str) -> GrammarResult<Parsed> {
    match kind {
        ParserKind::Unknown => Ok(None),
        ParserKind::Word => lift(parse_word(source), Parsed::Word),
        ParserKind::Property => lift(parse_property(source), Parsed::Property),
        ParserKind::PropertyAnyValue => {
            lift(parse_property_any_value(source), Parsed::PropertyAnyValue)
        }
        ParserKind::PropertyList => lift(parse_property_list(source), Parsed::PropertyList),
        ParserKind::BlockTag => lift(parse_block_tag(source), Parsed::BlockTag),
        ParserKind::Limitation => lift(parse_limitation(source), Parsed::Limitation),
        ParserKind::AddressRange => lift(parse_address_range(source), Parsed::AddressRange),
        ParserKind::PatternLiteral => {
            lift(parse_pattern_literal(source), Parsed::PatternLiteral)
        }
        ParserKind::MethodCall => lift(parse_method_call(source), Parsed::MethodCall),
    }
}

/// Reusable parser record.
///
/// One instance may serve any number of sequential calls (the dispatch loop reuses it
/// across candidate kinds), but it is `&mut` for the duration of a call and is never
/// shared between concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    kind: ParserKind,
    outcome: Outcome,
    error: Option<GrammarError>,
    parsed: Option<Parsed>,
}

impl LineParser {
    pub fn new(kind: ParserKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn kind(&self) -> ParserKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: ParserKind) {
        self.kind = kind;
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn error(&self) -> Option<&GrammarError> {
        self.error.as_ref()
    }

    /// Diagnostic for the last attempt; empty unless the outcome is `Error`.
    pub fn error_text(&self) -> String {
        self.error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Payload of the last attempt; `None` unless the outcome is `Ok`.
    pub fn parsed(&self) -> Option<&Parsed> {
        self.parsed.as_ref()
    }

    /// Move the payload out, leaving the record as if nothing matched.
    pub fn take_parsed(&mut self) -> Option<Parsed> {
        self.parsed.take()
    }

    /// Parse `source` with the current kind.
    pub fn parse(&mut self, source: &str) -> Outcome {
        self.reset();
        let result = run_grammar(self.kind, source);
        self.record(result)
    }

    /// Try each kind in order until one yields `Ok` or `Error`.
    ///
    /// Order is the caller's tool for disambiguation: overlapping grammars must be listed
    /// from most to least specific. When every kind is `NoMatch` the kind is left as
    /// `Unknown`.
    pub fn try_parse(&mut self, source: &str, kinds: &[ParserKind]) -> Outcome {
        self.reset();
        for &kind in kinds {
            self.kind = kind;
            let outcome = self.parse(source);
            trace!(%kind, %outcome, source, "grammar attempt");
            if outcome.is_decisive() {
                return outcome;
            }
        }
        self.kind = ParserKind::Unknown;
        self.outcome
    }

    fn reset(&mut self) {
        self.outcome = Outcome::NoMatch;
        self.error = None;
        self.parsed = None;
    }

    fn record(&mut self, result: GrammarResult<Parsed>) -> Outcome {
        self.outcome = Outcome::of(&result);
        match result {
            Ok(parsed) => self.parsed = parsed,
            Err(error) => {
                debug!(kind = %self.kind, %error, "grammar rejected line");
                self.error = Some(error);
            }
        }
        self.outcome
    }

    pub fn word(&self) -> Option<&Word> {
        match self.parsed.as_ref()? {
            Parsed::Word(word) => Some(word),
            _ => None,
        }
    }

    /// Payload of either property grammar (`Property` or `PropertyAnyValue`).
    pub fn property(&self) -> Option<&Property> {
        match self.parsed.as_ref()? {
            Parsed::Property(prop) | Parsed::PropertyAnyValue(prop) => Some(prop),
            _ => None,
        }
    }

    pub fn property_list(&self) -> Option<&PropertyList> {
        match self.parsed.as_ref()? {
            Parsed::PropertyList(list) => Some(list),
            _ => None,
        }
    }

    pub fn block_tag(&self) -> Option<&BlockTagLine> {
        match self.parsed.as_ref()? {
            Parsed::BlockTag(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn limitation(&self) -> Option<&Limitation> {
        match self.parsed.as_ref()? {
            Parsed::Limitation(lim) => Some(lim),
            _ => None,
        }
    }

    pub fn address_range(&self) -> Option<&AddressRange> {
        match self.parsed.as_ref()? {
            Parsed::AddressRange(range) => Some(range),
            _ => None,
        }
    }

    pub fn pattern_literal(&self) -> Option<&PatternLiteral> {
        match self.parsed.as_ref()? {
            Parsed::PatternLiteral(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn method_call(&self) -> Option<&MethodCall> {
        match self.parsed.as_ref()? {
            Parsed::MethodCall(call) => Some(call),
            _ => None,
        }
    }

    /// The tag of a block tag line, if that is what was parsed.
    pub fn tag(&self) -> Option<BlockTag> {
        self.block_tag().map(|line| line.tag)
    }

    // Code generation helpers. Empty (or false) unless an address range was parsed.

    pub fn range_string(&self) -> String {
        self.address_range()
            .map(AddressRange::formatted_range)
            .unwrap_or_default()
    }

    pub fn tags_string(&self) -> String {
        self.address_range()
            .map(AddressRange::formatted_tags)
            .unwrap_or_default()
    }

    pub fn bus_interfaces_string(&self) -> String {
        self.address_range()
            .map(AddressRange::formatted_bus_interfaces)
            .unwrap_or_default()
    }

    pub fn is_inverse(&self) -> bool {
        self.address_range().is_some_and(|range| range.inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resets_previous_state() {
        let mut parser = LineParser::new(ParserKind::BlockTag);
        assert_eq!(parser.parse("<foo>"), Outcome::Error);
        assert!(!parser.error_text().is_empty());

        assert_eq!(parser.parse("<routing>"), Outcome::Ok);
        assert_eq!(parser.error_text(), "");
        assert_eq!(parser.tag(), Some(BlockTag::Routing));

        assert_eq!(parser.parse("plain text"), Outcome::NoMatch);
        assert!(parser.parsed().is_none());
        assert_eq!(parser.error_text(), "");
    }

    #[test]
    fn test_unknown_kind_never_matches() {
        let mut parser = LineParser::default();
        assert_eq!(parser.parse("foo"), Outcome::NoMatch);
    }

    #[test]
    fn test_try_parse_stops_at_first_decisive() {
        let mut parser = LineParser::default();
        let order = [ParserKind::BlockTag, ParserKind::Property, ParserKind::Word];

        assert_eq!(parser.try_parse("bus width : 32", &order), Outcome::Ok);
        assert_eq!(parser.kind(), ParserKind::Property);

        assert_eq!(parser.try_parse("<nope>", &order), Outcome::Error);
        assert_eq!(parser.kind(), ParserKind::BlockTag);
        assert_eq!(parser.error_text(), "Unknown blocktag 'nope'");

        assert_eq!(parser.try_parse("12 34", &order), Outcome::NoMatch);
        assert_eq!(parser.kind(), ParserKind::Unknown);
    }

    #[test]
    fn test_try_parse_with_no_kinds() {
        let mut parser = LineParser::new(ParserKind::Word);
        assert_eq!(parser.try_parse("foo", &[]), Outcome::NoMatch);
        assert_eq!(parser.kind(), ParserKind::Unknown);
    }

    #[test]
    fn test_range_helpers_require_ok() {
        let mut parser = LineParser::new(ParserKind::AddressRange);
        parser.parse("range 0x10..0x20 with a notfor M0");
        assert_eq!(parser.range_string(), "0x0000_0010, 0x0000_0020");
        assert_eq!(parser.tags_string(), "{a}");
        assert_eq!(parser.bus_interfaces_string(), "{\"M0\"}");
        assert!(parser.is_inverse());

        parser.parse("range 0x20..0x10");
        assert_eq!(parser.outcome(), Outcome::Error);
        assert_eq!(parser.range_string(), "");
        assert_eq!(parser.tags_string(), "");
        assert_eq!(parser.bus_interfaces_string(), "");
        assert!(!parser.is_inverse());
    }

    #[test]
    fn test_payload_matches_kind() {
        let mut parser = LineParser::default();
        for kind in ParserKind::GRAMMARS {
            parser.set_kind(kind);
            if parser.parse("foo(a)") == Outcome::Ok {
                assert_eq!(parser.parsed().map(Parsed::kind), Some(kind));
            }
        }
    }
}
