/// Expression parsing methods.
///
/// This chunk implements precedence climbing. The prefix/infix “registries” are exhaustive matches over
/// [`TokenKind`], so every category is either handled or explicitly routed to the no-handler diagnostic.
///
/// ## Notes
/// - Which operators may appear in prefix/infix position comes from `monkey_core::lang::operators`.
/// - Binding power comes from [`Precedence::of`].
type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Option<Expression>;
type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Option<Expression>;

impl<'a> Parser<'a> {
    // ========================================================================
    // Rule lookup
    // ========================================================================

    fn prefix_parse_fn(kind: &TokenKind) -> Option<PrefixParseFn<'a>> {
        match kind {
            TokenKind::Ident => Some(Self::parse_identifier),
            TokenKind::Int => Some(Self::parse_integer_literal),
            TokenKind::Operator(id) if operators::has_fixity(*id, Fixity::Prefix) => {
                Some(Self::parse_prefix_expression)
            }
            // Keywords are reserved for constructs without parse support yet (`fn`, `if`, booleans).
            TokenKind::Operator(_)
            | TokenKind::Keyword(_)
            | TokenKind::Punctuation(_)
            | TokenKind::Illegal
            | TokenKind::Eof => None,
        }
    }

    fn infix_parse_fn(kind: &TokenKind) -> Option<InfixParseFn<'a>> {
        match kind {
            TokenKind::Operator(id) if operators::has_fixity(*id, Fixity::Infix) => {
                Some(Self::parse_infix_expression)
            }
            TokenKind::Operator(_)
            | TokenKind::Keyword(_)
            | TokenKind::Punctuation(_)
            | TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Illegal
            | TokenKind::Eof => None,
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// Parse an expression whose infix operators all bind tighter than `precedence`.
    ///
    /// Starts with the expression's first token as `cur_token` and ends with `cur_token` on its last token.
    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        if self.depth >= self.config.max_expression_depth {
            let msg = format!(
                "expression nesting exceeds the maximum depth of {}",
                self.config.max_expression_depth
            );
            self.errors.push(
                ParseError::limit(msg, self.cur_token.span)
                    .with_hint("split the expression with `let` bindings"),
            );
            return None;
        }

        self.depth += 1;
        let expr = self.parse_expression_at_depth(precedence);
        self.depth -= 1;
        expr
    }

    fn parse_expression_at_depth(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = Self::prefix_parse_fn(&self.cur_token.kind) else {
            self.no_prefix_parse_fn_error();
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_token.kind.is_punctuation(PunctuationId::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_parse_fn(&self.peek_token.kind) else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(self.cur_token.clone())))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        match self.cur_token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral::new(self.cur_token.clone(), value))),
            Err(_) => {
                let msg = format!("could not parse {} as integer", self.cur_token.literal);
                self.errors.push(
                    ParseError::syntax(msg, self.cur_token.span)
                        .with_hint(format!("integer literals must lie between {} and {}", i64::MIN, i64::MAX)),
                );
                None
            }
        }
    }

    /// `<op> <expr>` where the operand binds at [`Precedence::Prefix`].
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expression::Prefix(PrefixExpression::new(token, right)))
    }

    /// `<left> <op> <expr>`; the right operand is parsed at the operator's own precedence, which keeps
    /// same-level chains left-associative.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let precedence = self.cur_precedence();
        self.next_token();

        let right = self.parse_expression(precedence)?;
        Some(Expression::Infix(InfixExpression::new(token, left, right)))
    }
}
