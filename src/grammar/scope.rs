//! Active block tag stack
//!
//! Tracks which block tags are open while a caller walks a macro body, outermost first.
//! A tag may not be reopened while it is open, closings must match the innermost open tag,
//! and nesting of different tags can be switched off entirely.

use std::fmt;

use super::block_tag::BlockTagLine;
use super::kind::BlockTag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeError {
    AlreadyOpen(BlockTag),
    NestingNotAllowed { tag: BlockTag, outer: BlockTag },
    CloseWithoutOpen(BlockTag),
    CloseMismatch { tag: BlockTag, innermost: BlockTag },
    Unclosed(Vec<BlockTag>),
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeError::AlreadyOpen(tag) => write!(f, "blocktag <{}> is already open", tag),
            ScopeError::NestingNotAllowed { tag, outer } => {
                write!(f, "nested blocktag <{}> inside <{}>", tag, outer)
            }
            ScopeError::CloseWithoutOpen(tag) => {
                write!(f, "closing blocktag </{}> without matching open", tag)
            }
            ScopeError::CloseMismatch { tag, innermost } => {
                write!(f, "closing blocktag </{}> but <{}> is open", tag, innermost)
            }
            ScopeError::Unclosed(tags) => {
                let names: Vec<String> = tags.iter().map(|tag| format!("<{}>", tag)).collect();
                write!(f, "unclosed blocktag(s) {}", names.join(", "))
            }
        }
    }
}

impl std::error::Error for ScopeError {}

#[derive(Debug, Clone)]
pub struct BlockScope {
    open: Vec<BlockTag>,
    allow_nesting: bool,
}

impl BlockScope {
    pub fn new(allow_nesting: bool) -> Self {
        Self {
            open: Vec::new(),
            allow_nesting,
        }
    }

    pub fn enter(&mut self, tag: BlockTag) -> Result<(), ScopeError> {
        if self.is_open(tag) {
            return Err(ScopeError::AlreadyOpen(tag));
        }
        if let (false, Some(&outer)) = (self.allow_nesting, self.open.last()) {
            return Err(ScopeError::NestingNotAllowed { tag, outer });
        }
        self.open.push(tag);
        Ok(())
    }

    pub fn exit(&mut self, tag: BlockTag) -> Result<(), ScopeError> {
        match self.open.last() {
            None => Err(ScopeError::CloseWithoutOpen(tag)),
            Some(&innermost) if innermost != tag => {
                Err(ScopeError::CloseMismatch { tag, innermost })
            }
            Some(_) => {
                self.open.pop();
                Ok(())
            }
        }
    }

    pub fn apply(&mut self, line: &BlockTagLine) -> Result<(), ScopeError> {
        if line.enter {
            self.enter(line.tag)
        } else {
            self.exit(line.tag)
        }
    }

    pub fn innermost(&self) -> Option<BlockTag> {
        self.open.last().copied()
    }

    /// Open tags, outermost first.
    pub fn open_tags(&self) -> &[BlockTag] {
        &self.open
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn is_open(&self, tag: BlockTag) -> bool {
        self.open.contains(&tag)
    }

    /// Close the scope at end of input; any tag still open is an error.
    pub fn finish(self) -> Result<(), ScopeError> {
        if self.open.is_empty() {
            Ok(())
        } else {
            Err(ScopeError::Unclosed(self.open))
        }
    }
}

impl Default for BlockScope {
    fn default() -> Self {
        Self::new(true)
    }
}
