//! Block tag grammar: `<tag>` opens a block, `</tag>` closes it

use serde::Serialize;

use super::error::GrammarError;
use super::kind::BlockTag;
use super::outcome::GrammarResult;
use super::patterns::{BLOCK_TAG_INNER, BLOCK_TAG_SHAPE};

/// A recognised block tag line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlockTagLine {
    pub tag: BlockTag,
    /// `true` for `<tag>`, `false` for `</tag>`
    pub enter: bool,
}

/// Recognise an opening or closing block tag.
///
/// Lines without the angle bracket shape are `NoMatch`, so this grammar can be offered
/// against any line. Once the brackets are there, the content must be an optional `/` and a
/// word with no whitespace, naming one of the [BlockTag] literals.
pub fn parse_block_tag(source: &str) -> GrammarResult<BlockTagLine> {
    let Some(shape) = BLOCK_TAG_SHAPE.captures(source) else {
        return Ok(None);
    };
    let inner = &shape["inner"];
    let parts = BLOCK_TAG_INNER
        .captures(inner)
        .ok_or_else(|| GrammarError::MalformedBlockTag(format!("<{}>", inner)))?;

    let name = &parts["name"];
    let tag = BlockTag::from_literal(name)
        .ok_or_else(|| GrammarError::UnknownBlockTag(name.to_string()))?;

    Ok(Some(BlockTagLine {
        tag,
        enter: parts.name("close").is_none(),
    }))
}
