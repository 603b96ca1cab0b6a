/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Advancing the two-token window (`next_token`)
/// - Checking / expecting the current and upcoming token
/// - Recording diagnostics
/// - Error recovery (`synchronize`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Shift the window: `peek_token` becomes current and a fresh token is pulled from the lexer.
    fn next_token(&mut self) {
        self.prev_token_end = self.cur_token.span.end;
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    fn cur_token_is(&self, kind: &TokenKind) -> bool {
        self.cur_token.kind == *kind
    }

    fn peek_token_is(&self, kind: &TokenKind) -> bool {
        self.peek_token.kind == *kind
    }

    /// If the upcoming token is `kind`, advance onto it and return `true`; otherwise record a diagnostic.
    fn expect_peek(&mut self, kind: &TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    /// Consume an optional `;` after a statement.
    fn skip_optional_semicolon(&mut self) {
        if self.peek_token.kind.is_punctuation(PunctuationId::Semicolon) {
            self.next_token();
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(&self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::of(&self.cur_token.kind)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    fn peek_error(&mut self, expected: &TokenKind) {
        let msg = format!(
            "expected next token to be {}, got {} instead",
            expected, self.peek_token.kind
        );
        self.errors.push(ParseError::syntax(msg, self.peek_token.span));
    }

    fn no_prefix_parse_fn_error(&mut self) {
        let kind = self.cur_token.kind;
        let mut err = ParseError::syntax(
            format!("no prefix parse function for {} found", kind),
            self.cur_token.span,
        );
        if kind == TokenKind::Illegal {
            err = err.with_hint(format!("`{}` is not a valid character here", self.cur_token.literal));
        } else if kind.keyword_id().is_some() {
            err = err.with_hint(format!("`{}` is reserved but not supported in expressions yet", self.cur_token.literal));
        }
        self.errors.push(err);
    }

    /// Return `true` if a line break separates the current token from the one before it.
    fn cur_token_starts_line(&self) -> bool {
        self.lexer
            .source()
            .get(self.prev_token_end..self.cur_token.span.start)
            .is_some_and(|gap| gap.contains('\n'))
    }

    /// Skip the rest of a failed statement and leave `cur_token` on the first token of the next one.
    ///
    /// A statement ends at `;` (consumed) or end of input. Since `;` is optional, recovery also stops at a
    /// `let`/`return` past the statement's first token, and at the first token of a later line. One
    /// malformed statement therefore produces one diagnostic, and the statements after it are still parsed.
    fn synchronize(&mut self, statement_start: usize) {
        tracing::debug!(
            at = %self.cur_token.kind,
            offset = self.cur_token.span.start,
            "abandoning statement"
        );
        let failed_at = self.cur_token.span.start;

        loop {
            let kind = self.cur_token.kind;
            if kind.is_statement_end() {
                if kind != TokenKind::Eof {
                    self.next_token();
                }
                return;
            }

            let start = self.cur_token.span.start;
            let starts_statement = matches!(kind, TokenKind::Keyword(KeywordId::Let | KeywordId::Return));
            if (starts_statement && start != statement_start) || (start > failed_at && self.cur_token_starts_line()) {
                return;
            }
            self.next_token();
        }
    }
}
