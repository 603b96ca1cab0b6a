//! Lexer for the Monkey language
//!
//! Turns source text into tokens, one token per [`Lexer::next_token`] call:
//! - Keywords (`fn`, `let`, `true`, `false`, `if`, `else`, `return`) and identifiers
//! - Integer literals (decimal digit runs)
//! - One- and two-character operators (`=`/`==`, `!`/`!=`)
//! - Delimiters and separators
//!
//! ## Notes
//! - Scanning never fails. An unrecognized character becomes an [`TokenKind::Illegal`] token and scanning
//!   continues; reporting is left to whoever consumes the tokens.
//! - Once the input is exhausted, every further call returns an `Eof` token.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token) and keyword classification

pub mod tokens;

pub use tokens::{Token, TokenKind, lookup_ident};

use crate::ast::Span;
use monkey_core::lang::operators::OperatorId;
use monkey_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// `ch` is the character at `position`; `read_position` is where the next one
// starts. `ch == None` is the end-of-input sentinel.
//
// [ch = '=']  peek '=' → consume both → EQ "=="
//             otherwise            → ASSIGN "="
// ============================================================================

/// Pull-based scanner over a source string.
pub struct Lexer<'a> {
    source: &'a str,
    /// Byte offset of `ch`.
    position: usize,
    /// Byte offset of the character after `ch`.
    read_position: usize,
    ch: Option<char>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut lexer = Self {
            source,
            position: 0,
            read_position: 0,
            ch: None,
        };
        lexer.read_char();
        lexer
    }

    /// The text being scanned.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Scan the whole input.
    ///
    /// The returned vector always ends with exactly one `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// Move to the next character, or park on the end-of-input sentinel.
    fn read_char(&mut self) {
        self.ch = self.source[self.read_position..].chars().next();
        self.position = self.read_position;
        self.read_position += self.ch.map_or(0, char::len_utf8);
    }

    /// Character after `ch`, without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.source[self.read_position..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let Some(c) = self.ch else {
            return Token::new(TokenKind::Eof, "", Span::new(start, start));
        };

        let kind = match c {
            '=' => self.two_char_operator(OperatorId::Assign, OperatorId::Eq),
            '!' => self.two_char_operator(OperatorId::Bang, OperatorId::NotEq),
            '+' => TokenKind::Operator(OperatorId::Plus),
            '-' => TokenKind::Operator(OperatorId::Minus),
            '*' => TokenKind::Operator(OperatorId::Asterisk),
            '/' => TokenKind::Operator(OperatorId::Slash),
            '<' => TokenKind::Operator(OperatorId::Lt),
            '>' => TokenKind::Operator(OperatorId::Gt),
            ',' => TokenKind::Punctuation(PunctuationId::Comma),
            ';' => TokenKind::Punctuation(PunctuationId::Semicolon),
            '(' => TokenKind::Punctuation(PunctuationId::LParen),
            ')' => TokenKind::Punctuation(PunctuationId::RParen),
            '{' => TokenKind::Punctuation(PunctuationId::LBrace),
            '}' => TokenKind::Punctuation(PunctuationId::RBrace),

            // Word and number scanners stop on the first character past the run.
            _ if is_letter(c) => return self.scan_identifier(start),
            _ if c.is_ascii_digit() => return self.scan_number(start),

            _ => TokenKind::Illegal,
        };

        self.read_char();
        self.token_from(kind, start)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// `simple` unless the next character is `=`, in which case `compound` (consuming the `=`).
    fn two_char_operator(&mut self, simple: OperatorId, compound: OperatorId) -> TokenKind {
        if self.peek_char() == Some('=') {
            self.read_char();
            TokenKind::Operator(compound)
        } else {
            TokenKind::Operator(simple)
        }
    }

    fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, &self.source[start..self.position], Span::new(start, self.position))
    }

    fn scan_identifier(&mut self, start: usize) -> Token {
        while self.ch.is_some_and(is_letter) {
            self.read_char();
        }
        let spelling = &self.source[start..self.position];
        self.token_from(lookup_ident(spelling), start)
    }

    /// Digits only: no sign, no fraction, leading zeros kept as written.
    fn scan_number(&mut self, start: usize) -> Token {
        while self.ch.is_some_and(|c| c.is_ascii_digit()) {
            self.read_char();
        }
        self.token_from(TokenKind::Int, start)
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Identifier characters: ASCII letters and `_`. Digits are not part of identifiers.
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Vec<Token> {
    let tokens = Lexer::new(source).tokenize();
    tracing::trace!(token_count = tokens.len(), "lexed source");
    tokens
}

// ============================================================================
// TESTS
// ============================================================================
