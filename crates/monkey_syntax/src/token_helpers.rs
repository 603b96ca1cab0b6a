//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use monkey_core::lang::keywords::KeywordId;
use monkey_core::lang::operators::OperatorId;
use monkey_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for tokens that end a statement (`;` or end of input).
    pub fn is_statement_end(&self) -> bool {
        matches!(self, TokenKind::Punctuation(PunctuationId::Semicolon) | TokenKind::Eof)
    }
}

impl Token {
    /// Return `true` if this token is [`TokenKind::Eof`].
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
