//! Address range grammar
//!
//! ```text
//! [add ]range start..end [(with|:|using) tag, ... [(for|notfor) bif, ...]]
//! ```
//!
//! The `range` keyword is optional. With it, the line belongs to this grammar and every
//! later failure is an error. Without it, the whole line is tried as a bare range and a line
//! without the `start..end` shape is `NoMatch`.
//!
//! The formatting helpers at the bottom produce the argument strings a code generator splices
//! into its configuration calls.

use serde::Serialize;
use std::collections::HashSet;

use super::error::GrammarError;
use super::outcome::GrammarResult;
use super::patterns::{split_list, RANGE_BOUNDS, RANGE_BUS_INTERFACES, RANGE_KEYWORD, RANGE_TAGS};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressRange {
    pub min: u64,
    pub max: u64,
    pub tags: Vec<String>,
    pub bus_interfaces: Vec<String>,
    /// Set by `notfor`: the range applies to every bus interface except the listed ones
    pub inverse: bool,
}

pub fn parse_address_range(source: &str) -> GrammarResult<AddressRange> {
    let (expression, committed) = match RANGE_KEYWORD.captures(source) {
        Some(caps) => (caps.name("rest").map_or("", |m| m.as_str()), true),
        None => (source, false),
    };

    let Some(bounds) = RANGE_BOUNDS.captures(expression) else {
        if committed {
            return Err(GrammarError::MalformedRange(expression.trim().to_string()));
        }
        return Ok(None);
    };

    let min = parse_unsigned(&bounds["start"])?;
    let max = parse_unsigned(&bounds["end"])?;
    if min > max {
        return Err(GrammarError::ReversedRange {
            start: min,
            end: max,
        });
    }

    let mut range = AddressRange {
        min,
        max,
        ..AddressRange::default()
    };

    let tail = &bounds["tail"];
    if tail.trim().is_empty() {
        return Ok(Some(range));
    }

    let tags = RANGE_TAGS
        .captures(tail)
        .ok_or_else(|| GrammarError::MalformedTags(tail.trim().to_string()))?;
    range.tags = split_list(&tags["tags"]);

    let rest = &tags["rest"];
    if rest.trim().is_empty() {
        return Ok(Some(range));
    }

    let bifs = RANGE_BUS_INTERFACES
        .captures(rest)
        .ok_or_else(|| GrammarError::MalformedBusInterfaces(rest.trim().to_string()))?;
    let list = &bifs["bifs"];
    let bus_interfaces = split_list(list);
    let mut seen = HashSet::new();
    if !bus_interfaces.iter().all(|bif| seen.insert(bif.as_str())) {
        return Err(GrammarError::DuplicateBusInterfaces(list.trim().to_string()));
    }
    range.bus_interfaces = bus_interfaces;
    range.inverse = &bifs["polarity"] == "notfor";

    Ok(Some(range))
}

/// Parse an unsigned integer token: decimal, or `0x` / `0o` / `0b` prefixed, with optional
/// `_` digit separators.
fn parse_unsigned(token: &str) -> Result<u64, GrammarError> {
    let digits = token.replace('_', "");
    let lower = digits.to_ascii_lowercase();
    let parsed = if let Some(hex) = lower.strip_prefix("0x") {
        u64::from_str_radix(hex, 16)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        u64::from_str_radix(oct, 8)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u64::from_str_radix(bin, 2)
    } else {
        lower.parse::<u64>()
    };
    parsed.map_err(|_| GrammarError::NonNumeric(token.to_string()))
}

impl AddressRange {
    /// `0xHHHH_HHHH, 0xHHHH_HHHH`: each bound as a high and a low 16-bit hex group.
    pub fn formatted_range(&self) -> String {
        format!("{}, {}", hex_groups(self.min), hex_groups(self.max))
    }

    /// Tags as `{a;b}`.
    pub fn formatted_tags(&self) -> String {
        format!("{{{}}}", self.tags.join(";"))
    }

    /// Bus interfaces, each quoted, as `{"M0";"M1"}`.
    pub fn formatted_bus_interfaces(&self) -> String {
        let quoted: Vec<String> = self
            .bus_interfaces
            .iter()
            .map(|bif| format!("\"{}\"", bif))
            .collect();
        format!("{{{}}}", quoted.join(";"))
    }
}

/// Bounds above 32 bits widen the high group rather than truncating.
fn hex_groups(value: u64) -> String {
    format!("0x{:04x}_{:04x}", value >> 16, value & 0xffff)
}
