//! Behaviour of each line grammar through the parser record
//!
//! Cases are grouped per grammar. Every case goes through `LineParser::parse`, so the shared
//! reset step and the payload accessors are exercised alongside the grammar itself.

use macrogram::grammar::{BlockTag, LimitationKeyword, LineParser, Outcome, ParserKind};
use rstest::rstest;

fn parse(kind: ParserKind, source: &str) -> LineParser {
    let mut parser = LineParser::new(kind);
    parser.parse(source);
    parser
}

// ===== Unrelated text never errors =====

#[rstest]
fn test_unrelated_text_is_no_match(
    #[values(
        ParserKind::Word,
        ParserKind::Property,
        ParserKind::PropertyAnyValue,
        ParserKind::PropertyList,
        ParserKind::BlockTag,
        ParserKind::Limitation,
        ParserKind::AddressRange,
        ParserKind::PatternLiteral,
        ParserKind::MethodCall
    )]
    kind: ParserKind,
    #[values("", "   ", "-- 12 !", "12 + 3")] source: &str,
) {
    let parser = parse(kind, source);
    assert_eq!(parser.outcome(), Outcome::NoMatch, "{kind} on {source:?}");
    assert_eq!(parser.error_text(), "");
    assert!(parser.parsed().is_none());
}

// ===== Word =====

#[rstest]
#[case("  foo123 ", Some("foo123"))]
#[case("x", Some("x"))]
#[case("123foo", None)]
#[case("", None)]
#[case("foo bar", None)]
fn test_word(#[case] source: &str, #[case] expected: Option<&str>) {
    let parser = parse(ParserKind::Word, source);
    assert_eq!(parser.word().map(|w| w.name.as_str()), expected);
    let outcome = if expected.is_some() {
        Outcome::Ok
    } else {
        Outcome::NoMatch
    };
    assert_eq!(parser.outcome(), outcome);
}

// ===== Property =====

#[test]
fn test_property_ok() {
    let parser = parse(ParserKind::Property, "bus width : 32");
    assert_eq!(parser.outcome(), Outcome::Ok);
    let prop = parser.property().unwrap();
    assert_eq!(prop.name, "bus width");
    assert_eq!(prop.val, "32");
}

#[rstest]
#[case("bus width : 32 bits", "expected <value> but got '32 bits'")]
#[case("mode : a,b", "expected <value> but got 'a,b'")]
fn test_property_error(#[case] source: &str, #[case] message: &str) {
    let parser = parse(ParserKind::Property, source);
    assert_eq!(parser.outcome(), Outcome::Error);
    assert_eq!(parser.error_text(), message);
    assert!(parser.property().is_none());
}

#[test]
fn test_property_any_value() {
    let parser = parse(ParserKind::PropertyAnyValue, "reset : apply(0x0, \"all\") ");
    assert_eq!(parser.outcome(), Outcome::Ok);
    let prop = parser.property().unwrap();
    assert_eq!(prop.name, "reset");
    assert_eq!(prop.val, "apply(0x0, \"all\")");
}

// ===== PropertyList =====

#[test]
fn test_property_list_ok() {
    let parser = parse(ParserKind::PropertyList, "modes: read, write, exec");
    assert_eq!(parser.outcome(), Outcome::Ok);
    let list = parser.property_list().unwrap();
    assert_eq!(list.name, "modes");
    assert_eq!(list.vals, vec!["read", "write", "exec"]);
}

#[test]
fn test_property_list_error() {
    let parser = parse(ParserKind::PropertyList, "modes: read write");
    assert_eq!(parser.outcome(), Outcome::Error);
    assert_eq!(
        parser.error_text(),
        "expected <value>[,<value>*] but got 'read write'"
    );
}

// ===== BlockTag =====

#[rstest]
#[case("<routing>", BlockTag::Routing, true)]
#[case("</routing>", BlockTag::Routing, false)]
#[case("<address_ranges>", BlockTag::AddressRanges, true)]
#[case("</access_limitations>", BlockTag::AccessLimitations, false)]
#[case(" <default_slave> ", BlockTag::DefaultSlave, true)]
fn test_block_tag_ok(#[case] source: &str, #[case] tag: BlockTag, #[case] enter: bool) {
    let parser = parse(ParserKind::BlockTag, source);
    assert_eq!(parser.outcome(), Outcome::Ok);
    let line = parser.block_tag().unwrap();
    assert_eq!(line.tag, tag);
    assert_eq!(line.enter, enter);
}

#[rstest]
#[case("<foo>", "Unknown blocktag 'foo'")]
#[case("<rout ing>", "Malformed blocktag '<rout ing>'")]
#[case("< routing>", "Malformed blocktag '< routing>'")]
fn test_block_tag_error(#[case] source: &str, #[case] message: &str) {
    let parser = parse(ParserKind::BlockTag, source);
    assert_eq!(parser.outcome(), Outcome::Error);
    assert_eq!(parser.error_text(), message);
}

// ===== Limitation =====

#[test]
fn test_limitation_ok() {
    let parser = parse(ParserKind::Limitation, "add max_err : 3");
    assert_eq!(parser.outcome(), Outcome::Ok);
    let lim = parser.limitation().unwrap();
    assert_eq!(lim.keyword, LimitationKeyword::Add);
    assert_eq!(lim.name, "max_err");
    assert_eq!(lim.val, "3");
}

#[rstest]
#[case("add badline", Outcome::NoMatch)]
#[case("add foo:bar:baz", Outcome::Error)]
#[case("set x = y", Outcome::Ok)]
#[case("rm  : y", Outcome::Error)]
fn test_limitation_outcomes(#[case] source: &str, #[case] outcome: Outcome) {
    assert_eq!(parse(ParserKind::Limitation, source).outcome(), outcome);
}

// ===== AddressRange =====

#[test]
fn test_bare_address_range() {
    let parser = parse(ParserKind::AddressRange, "0x1000..0x2000");
    assert_eq!(parser.outcome(), Outcome::Ok);
    let range = parser.address_range().unwrap();
    assert_eq!(range.min, 0x1000);
    assert_eq!(range.max, 0x2000);
    assert!(range.tags.is_empty());
    assert!(range.bus_interfaces.is_empty());
    assert_eq!(parser.tags_string(), "{}");
}

#[test]
fn test_qualified_address_range() {
    let parser = parse(
        ParserKind::AddressRange,
        "range 0x1000..0x2000 with secure, debug for M0,M1",
    );
    assert_eq!(parser.outcome(), Outcome::Ok);
    let range = parser.address_range().unwrap();
    assert_eq!(range.tags, vec!["secure", "debug"]);
    assert_eq!(range.bus_interfaces, vec!["M0", "M1"]);
    assert!(!parser.is_inverse());
    assert_eq!(parser.range_string(), "0x0000_1000, 0x0000_2000");
    assert_eq!(parser.tags_string(), "{secure;debug}");
    assert_eq!(parser.bus_interfaces_string(), "{\"M0\";\"M1\"}");
}

#[rstest]
#[case("0x2000..0x1000", "Reversed address range 0x2000..0x1000")]
#[case(
    "range 0x1000..0x2000 with secure, debug for M0,M0",
    "Bus interface list 'M0,M0' contains identical items"
)]
#[case("range 0x1000..zz", "Non-numeric value 'zz' in address range")]
#[case(
    "add range nothing",
    "Malformed address range 'nothing', should be start..end"
)]
#[case("range", "Malformed address range '', should be start..end")]
#[case("add range", "Malformed address range '', should be start..end")]
fn test_address_range_error(#[case] source: &str, #[case] message: &str) {
    let parser = parse(ParserKind::AddressRange, source);
    assert_eq!(parser.outcome(), Outcome::Error);
    assert_eq!(parser.error_text(), message);
    assert_eq!(parser.range_string(), "");
}

// ===== PatternLiteral =====

#[rstest]
#[case(r#""^M[0-9]+$""#, Outcome::Ok)]
#[case(r#" "a|b" "#, Outcome::Ok)]
#[case(r#""(unclosed""#, Outcome::Error)]
#[case("unquoted", Outcome::NoMatch)]
fn test_pattern_literal(#[case] source: &str, #[case] outcome: Outcome) {
    let parser = parse(ParserKind::PatternLiteral, source);
    assert_eq!(parser.outcome(), outcome);
    if outcome == Outcome::Error {
        assert!(parser
            .error_text()
            .starts_with("Invalid string match pattern '(unclosed'"));
    }
}

// ===== MethodCall =====

#[rstest]
#[case("foo(a, b, \"x,y\")", &["a", "b", "\"x,y\""])]
#[case("foo(a, (b,c))", &["a", "(b,c)"])]
#[case("foo()", &[""])]
fn test_method_call_ok(#[case] source: &str, #[case] arguments: &[&str]) {
    let parser = parse(ParserKind::MethodCall, source);
    assert_eq!(parser.outcome(), Outcome::Ok);
    let call = parser.method_call().unwrap();
    assert_eq!(call.method_name, "foo");
    assert_eq!(call.arguments, arguments);
}

#[test]
fn test_method_call_mismatched() {
    let parser = parse(ParserKind::MethodCall, "foo(a, (b,c)");
    assert_eq!(parser.outcome(), Outcome::Error);
    assert_eq!(
        parser.error_text(),
        "Mismatched parentheses or quotes in 'a, (b,c'"
    );
}

// ===== Idempotence =====

#[rstest]
#[case(ParserKind::AddressRange, "range 1..2 with a notfor b")]
#[case(ParserKind::MethodCall, "f(x, \"y\")")]
#[case(ParserKind::BlockTag, "<nope>")]
#[case(ParserKind::Property, "a : b")]
fn test_parse_is_idempotent(#[case] kind: ParserKind, #[case] source: &str) {
    let mut parser = LineParser::new(kind);
    let first_outcome = parser.parse(source);
    let first = (parser.error_text(), parser.parsed().cloned());

    let second_outcome = parser.parse(source);
    let second = (parser.error_text(), parser.parsed().cloned());

    assert_eq!(first_outcome, second_outcome);
    assert_eq!(first, second);
}
