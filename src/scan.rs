//! Whole-body classification
//!
//! Runs every line of a macro body through the dispatcher with one reused [LineParser],
//! tracking block tags in a [BlockScope]. The result is a serializable report with one
//! entry per classified line, which is what the command-line front end prints.

use serde::Serialize;
use tracing::debug;

use crate::diagnostics::Diagnostic;
use crate::grammar::{BlockScope, LineParser, Outcome, Parsed, ParserKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Grammar trial order, most specific first
    pub order: Vec<ParserKind>,
    pub terminator: Option<String>,
    pub comment_prefix: Option<String>,
    pub skip_blank: bool,
    pub allow_nested_blocks: bool,
}

/// Mirrors `defaults/macrogram.default.toml`, for callers that skip configuration loading.
impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            order: vec![
                ParserKind::BlockTag,
                ParserKind::AddressRange,
                ParserKind::Limitation,
                ParserKind::PatternLiteral,
                ParserKind::MethodCall,
                ParserKind::PropertyList,
                ParserKind::Property,
                ParserKind::Word,
            ],
            terminator: Some(";".to_string()),
            comment_prefix: Some("//".to_string()),
            skip_blank: true,
            allow_nested_blocks: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineReport {
    /// 1-based line number in the body
    pub line: usize,
    pub text: String,
    pub kind: ParserKind,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<Parsed>,
    /// Block tags open after this line, outermost first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub scope: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub lines: Vec<LineReport>,
    /// Problems not tied to a single line's grammar, such as unclosed block tags
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trailing: Vec<Diagnostic>,
}

impl ScanReport {
    pub fn has_errors(&self) -> bool {
        !self.trailing.is_empty() || self.lines.iter().any(|l| l.outcome == Outcome::Error)
    }

    /// Every error in line order, trailing problems last.
    pub fn errors(&self) -> Vec<Diagnostic> {
        self.lines
            .iter()
            .filter_map(|l| l.error.as_ref().map(|e| Diagnostic::new(l.line, e.clone())))
            .chain(self.trailing.iter().cloned())
            .collect()
    }

    /// One line per classified line: `<line>: <kind> <outcome>[: <error>]`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&format!("{}: {} {}", line.line, line.kind, line.outcome));
            if let Some(error) = &line.error {
                out.push_str(&format!(": {}", error));
            }
            out.push('\n');
        }
        for diagnostic in &self.trailing {
            out.push_str(&format!("{}\n", diagnostic));
        }
        out
    }
}

/// Strip the statement terminator and surrounding whitespace.
fn prepare_line<'a>(raw: &'a str, options: &ScanOptions) -> &'a str {
    let trimmed = raw.trim();
    match &options.terminator {
        Some(terminator) => trimmed.strip_suffix(terminator.as_str()).unwrap_or(trimmed),
        None => trimmed,
    }
}

fn is_skipped(text: &str, options: &ScanOptions) -> bool {
    if text.is_empty() {
        return options.skip_blank;
    }
    options
        .comment_prefix
        .as_deref()
        .is_some_and(|prefix| text.starts_with(prefix))
}

/// Classify every line of `source`.
pub fn scan_body(source: &str, options: &ScanOptions) -> ScanReport {
    let mut parser = LineParser::default();
    let mut scope = BlockScope::new(options.allow_nested_blocks);
    let mut report = ScanReport::default();
    let mut last_line = 0;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        last_line = line;
        let text = prepare_line(raw, options);
        if is_skipped(text, options) {
            continue;
        }

        parser.try_parse(text, &options.order);
        let mut outcome = parser.outcome();
        let mut error = (outcome == Outcome::Error).then(|| parser.error_text());

        if let Some(tag_line) = parser.block_tag() {
            if let Err(scope_error) = scope.apply(tag_line) {
                debug!(line, %scope_error, "block scope violation");
                outcome = Outcome::Error;
                error = Some(scope_error.to_string());
            } else {
                debug!(line, depth = scope.depth(), "block scope updated");
            }
        }

        report.lines.push(LineReport {
            line,
            text: text.to_string(),
            kind: parser.kind(),
            outcome,
            error,
            parsed: parser.take_parsed(),
            scope: scope.open_tags().iter().map(ToString::to_string).collect(),
        });
    }

    if let Err(scope_error) = scope.finish() {
        report
            .trailing
            .push(Diagnostic::new(last_line, scope_error.to_string()));
    }

    report
}
