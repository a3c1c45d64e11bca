//! Method call grammar: `name(arg, arg, ...)`
//!
//! The argument list is split with a single left-to-right scan driven by a stack of open
//! constructs. Commas only separate arguments at the top level; inside parentheses or
//! quotes they are part of the argument text. Inside quotes a backslash escapes the next
//! character, so `\"` never closes the string. Arguments are trimmed but otherwise left
//! as written.

use serde::Serialize;

use super::error::GrammarError;
use super::outcome::GrammarResult;
use super::patterns::METHOD_CALL;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodCall {
    pub method_name: String,
    /// Never empty: `foo()` yields one empty argument
    pub arguments: Vec<String>,
}

pub fn parse_method_call(source: &str) -> GrammarResult<MethodCall> {
    let Some(caps) = METHOD_CALL.captures(source) else {
        return Ok(None);
    };

    Ok(Some(MethodCall {
        method_name: caps["name"].to_string(),
        arguments: split_arguments(&caps["args"])?,
    }))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Paren,
    Quote,
    Escape,
}

/// Split the text between the call's parentheses into trimmed top-level arguments.
pub fn split_arguments(args: &str) -> Result<Vec<String>, GrammarError> {
    let mut stack: Vec<Frame> = Vec::new();
    let mut arguments = Vec::new();
    let mut boundary = 0;

    for (i, ch) in args.char_indices() {
        match stack.last().copied() {
            None => match ch {
                ',' => {
                    arguments.push(args[boundary..i].trim().to_string());
                    boundary = i + ch.len_utf8();
                }
                '(' => stack.push(Frame::Paren),
                '"' => stack.push(Frame::Quote),
                ')' => {
                    let prefix = &args[..i + ch.len_utf8()];
                    return Err(GrammarError::UnexpectedCloseParen(prefix.to_string()));
                }
                _ => {}
            },
            Some(Frame::Escape) => {
                stack.pop();
            }
            Some(Frame::Quote) => match ch {
                '"' => {
                    stack.pop();
                }
                '\\' => stack.push(Frame::Escape),
                _ => {}
            },
            Some(Frame::Paren) => match ch {
                ')' => {
                    stack.pop();
                }
                '(' => stack.push(Frame::Paren),
                '"' => stack.push(Frame::Quote),
                _ => {}
            },
        }
    }

    if !stack.is_empty() {
        return Err(GrammarError::MismatchedDelimiters(args.to_string()));
    }
    arguments.push(args[boundary..].trim().to_string());

    Ok(arguments)
}
