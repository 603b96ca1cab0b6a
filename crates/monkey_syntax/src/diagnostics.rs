//! Diagnostics for the Monkey syntax frontend.
//!
//! The parser never aborts: every problem becomes a [`ParseError`] that is appended to a list, and the caller
//! decides what to do with the list (print and stop, or carry on). Errors implement [`miette::Diagnostic`] so
//! a driver can render them against the source text.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

/// A recoverable parse error with location information.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub hint: Option<String>,
}

impl ParseError {
    pub fn new(message: String, span: Span, kind: ErrorKind) -> Self {
        Self {
            message,
            span,
            kind,
            hint: None,
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self::new(message, span, ErrorKind::Syntax)
    }

    pub fn limit(message: String, span: Span) -> Self {
        Self::new(message, span, ErrorKind::Limit)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Attach the source text so the error can be rendered with a highlighted snippet.
    pub fn to_report(&self, file_name: &str, source: &str) -> miette::Report {
        miette::Report::new(self.clone()).with_source_code(NamedSource::new(file_name, source.to_string()))
    }
}

/// Broad classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The token stream does not match the grammar.
    Syntax,
    /// A configured parser limit was exceeded.
    Limit,
}

impl ErrorKind {
    fn code(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "monkey::syntax",
            ErrorKind::Limit => "monkey::limit",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Limit => write!(f, "limit exceeded"),
        }
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.hint
            .as_ref()
            .map(|hint| Box::new(hint) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            Some(self.kind.to_string()),
            self.span,
        ))))
    }
}
