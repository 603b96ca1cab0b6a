//! Driver-facing helpers on top of the syntax crate.
//!
//! Drivers usually want one of two things: a finished [`Program`] or a readable report of what went wrong.
//! [`check`] gives the first as a `Result`, [`render_diagnostics`] the second as text with source snippets.

use std::fmt::Write as _;

use miette::{GraphicalReportHandler, GraphicalTheme};
use thiserror::Error;

use crate::ast::Program;
use crate::diagnostics::ParseError;
use crate::parser;

/// Error returned by [`check`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrontendError {
    #[error("{file_name}: {} syntax error(s)", .errors.len())]
    Syntax { file_name: String, errors: Vec<ParseError> },
}

impl FrontendError {
    /// The individual parse errors, in source order.
    pub fn errors(&self) -> &[ParseError] {
        match self {
            FrontendError::Syntax { errors, .. } => errors,
        }
    }
}

/// Parse `source` and require that it is free of diagnostics.
///
/// ## Parameters
/// - `file_name`: Name used in error messages.
/// - `source`: Monkey source text.
///
/// ## Errors
/// Returns [`FrontendError::Syntax`] carrying every diagnostic if any was recorded.
#[tracing::instrument(skip(source), fields(source_len = source.len()))]
pub fn check(file_name: &str, source: &str) -> Result<Program, FrontendError> {
    parser::parse(source).into_result().map_err(|errors| {
        tracing::debug!(error_count = errors.len(), "source has syntax errors");
        FrontendError::Syntax {
            file_name: file_name.to_string(),
            errors,
        }
    })
}

/// Render diagnostics against their source, one snippet per error, without ANSI colors.
pub fn render_diagnostics(file_name: &str, source: &str, errors: &[ParseError]) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();

    for err in errors {
        let report = err.to_report(file_name, source);
        if handler.render_report(&mut out, &*report).is_err() {
            // Snippet rendering failed (e.g. a span past the end of the text); keep the message.
            let _ = writeln!(out, "{}: {}", err.kind, err);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_ok() {
        let program = check("ok.mk", "let a = 1; a * 2").unwrap();
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_check_reports_every_error() {
        let err = check("bad.mk", "let = 1; @;").unwrap_err();
        assert_eq!(err.errors().len(), 2);
        assert_eq!(err.to_string(), "bad.mk: 2 syntax error(s)");
    }

    #[test]
    fn test_render_contains_message_and_file() {
        let source = "let x 5;";
        let output = parser::parse(source);
        let rendered = render_diagnostics("main.mk", source, &output.errors);
        assert!(rendered.contains("expected next token to be =, got INT instead"), "{}", rendered);
        assert!(rendered.contains("main.mk"), "{}", rendered);
    }

    #[test]
    fn test_render_nothing_for_no_errors() {
        assert_eq!(render_diagnostics("empty.mk", "", &[]), "");
    }
}
