//! Diagnostic rendering
//!
//! The grammars only produce a message; callers that treat an error as fatal want it shown
//! next to the offending line. [Diagnostic] pairs the two and renders the report text.

use serde::Serialize;
use std::fmt;

/// A message attached to a 1-based line of a macro body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }

    /// `error: <message>` followed by the numbered source context.
    pub fn render(&self, source: &str) -> String {
        format!(
            "error: {}\n{}",
            self.message,
            format_source_context(source, self.line)
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

/// Format source code context around a 1-based line.
///
/// Shows 2 lines before the line, the line itself with a >> marker, and 2 lines after.
/// All lines are numbered for easy reference.
pub fn format_source_context(source: &str, line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let error_line = line.saturating_sub(1);

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();
    for line_num in start_line..end_line {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!(
            "{} {:3} | {}\n",
            marker,
            line_num + 1,
            lines[line_num]
        ));
    }

    context
}
