//! Token types for the Monkey lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for delimiters and separators
//!
//! ## Notes
//! - `TokenKind` is the closed set of lexical categories. Identifier and integer tokens carry no payload in the
//!   kind; their text is the token's `literal`.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::ast::Span;
use monkey_core::lang::keywords;
use monkey_core::lang::operators::{self, OperatorId};
use monkey_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(keywords::KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident,
    Int,

    // ========== Special ==========
    Illegal, // unrecognized character
    Eof,     // end of input
}

impl fmt::Display for TokenKind {
    /// Category name as it appears in diagnostics: `IDENT`, `INT`, `LET`, `==`, `;`, ...
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "{}", keywords::token_name(*id)),
            TokenKind::Operator(id) => write!(f, "{}", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "{}", punctuation::as_str(*id)),
            TokenKind::Ident => write!(f, "IDENT"),
            TokenKind::Int => write!(f, "INT"),
            TokenKind::Illegal => write!(f, "ILLEGAL"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// A token: its category, the exact source text that produced it, and where that text sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }
}

/// Classify an identifier spelling: the keyword category if it is reserved, otherwise [`TokenKind::Ident`].
pub fn lookup_ident(ident: &str) -> TokenKind {
    match keywords::from_str(ident) {
        Some(id) => TokenKind::Keyword(id),
        None => TokenKind::Ident,
    }
}
