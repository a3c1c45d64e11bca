//! Grammar kinds and the block tag vocabulary

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies which grammar a [LineParser](super::LineParser) applies.
///
/// `Unknown` is what the dispatcher leaves behind when no candidate grammar matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParserKind {
    #[default]
    Unknown,
    Word,
    Property,
    PropertyAnyValue,
    PropertyList,
    BlockTag,
    Limitation,
    AddressRange,
    PatternLiteral,
    MethodCall,
}

impl ParserKind {
    /// Every kind that selects a grammar, in declaration order.
    pub const GRAMMARS: [ParserKind; 9] = [
        ParserKind::Word,
        ParserKind::Property,
        ParserKind::PropertyAnyValue,
        ParserKind::PropertyList,
        ParserKind::BlockTag,
        ParserKind::Limitation,
        ParserKind::AddressRange,
        ParserKind::PatternLiteral,
        ParserKind::MethodCall,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParserKind::Unknown => "unknown",
            ParserKind::Word => "word",
            ParserKind::Property => "property",
            ParserKind::PropertyAnyValue => "property_any_value",
            ParserKind::PropertyList => "property_list",
            ParserKind::BlockTag => "block_tag",
            ParserKind::Limitation => "limitation",
            ParserKind::AddressRange => "address_range",
            ParserKind::PatternLiteral => "pattern_literal",
            ParserKind::MethodCall => "method_call",
        }
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParserKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        std::iter::once(ParserKind::Unknown)
            .chain(ParserKind::GRAMMARS)
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| format!("unknown grammar kind '{}'", s))
    }
}

/// The closed block tag vocabulary.
///
/// The textual form of each tag is exactly its bracketed spelling: `<address_ranges>` is
/// `BlockTag::AddressRanges`, case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockTag {
    AddressRanges,
    SafeAddressRanges,
    UnsafeAddressRanges,
    AccessLimitations,
    Limitations,
    DefaultSlave,
    Routing,
}

impl BlockTag {
    pub const ALL: [BlockTag; 7] = [
        BlockTag::AddressRanges,
        BlockTag::SafeAddressRanges,
        BlockTag::UnsafeAddressRanges,
        BlockTag::AccessLimitations,
        BlockTag::Limitations,
        BlockTag::DefaultSlave,
        BlockTag::Routing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockTag::AddressRanges => "address_ranges",
            BlockTag::SafeAddressRanges => "safe_address_ranges",
            BlockTag::UnsafeAddressRanges => "unsafe_address_ranges",
            BlockTag::AccessLimitations => "access_limitations",
            BlockTag::Limitations => "limitations",
            BlockTag::DefaultSlave => "default_slave",
            BlockTag::Routing => "routing",
        }
    }

    /// Exact, case-sensitive lookup of a tag literal.
    pub fn from_literal(literal: &str) -> Option<Self> {
        BlockTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == literal)
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
