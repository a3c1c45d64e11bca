//! Grammar module for macro body lines
//!
//! Every grammar recognises a single, already-delimited line of text:
//!
//! 1. **word** - a bare identifier
//! 2. **property** - `name : value`, `name : anything` and `name : v1, v2, ...`
//! 3. **block_tag** - `<tag>` / `</tag>` from a fixed vocabulary
//! 4. **limitation** - `add|set|rm name : value`
//! 5. **address_range** - `[add ]range start..end [with tags [for|notfor bifs]]`
//! 6. **pattern_literal** - a quoted match pattern
//! 7. **method_call** - `name(arg, arg, ...)`
//!
//! Each grammar is a pure function from text to [GrammarResult]. The [LineParser] record wraps
//! them with the shared reset step and the ordered dispatch loop ([LineParser::try_parse]).
//!
//! ## Outcomes
//!
//! - `NoMatch`: the grammar does not apply. Never an error, so grammars can be tried
//!   speculatively against unrelated lines.
//! - `Error`: a leading marker committed the line to the grammar but the rest is malformed.
//! - `Ok`: the payload is populated.

pub mod address_range;
pub mod block_tag;
pub mod error;
pub mod kind;
pub mod limitation;
pub mod method_call;
pub mod outcome;
pub mod parser;
pub mod pattern_literal;
mod patterns;
pub mod property;
pub mod scope;
pub mod word;

pub use address_range::AddressRange;
pub use block_tag::BlockTagLine;
pub use error::GrammarError;
pub use kind::{BlockTag, ParserKind};
pub use limitation::{Limitation, LimitationKeyword};
pub use method_call::MethodCall;
pub use outcome::{GrammarResult, Outcome};
pub use parser::{LineParser, Parsed};
pub use pattern_literal::PatternLiteral;
pub use property::{Property, PropertyList};
pub use scope::{BlockScope, ScopeError};
pub use word::Word;
