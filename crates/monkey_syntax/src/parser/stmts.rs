/// Statement parsing methods.
///
/// Dispatch is purely on the current token: `let`, `return`, or anything else as an expression statement.
/// Each method starts with the statement's first token as `cur_token` and ends with `cur_token` on the
/// statement's last token (its `;` when present).
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Keyword(KeywordId::Let) => self.parse_let_statement().map(Statement::Let),
            TokenKind::Keyword(KeywordId::Return) => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    /// `let <ident> = <expr> [;]`
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(&TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.cur_token.clone());

        if !self.expect_peek(&TokenKind::Operator(OperatorId::Assign)) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(LetStatement::new(token, name, value))
    }

    /// `return <expr> [;]`
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.cur_token.clone();
        self.next_token();

        let return_value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(ReturnStatement::new(token, return_value))
    }

    /// `<expr> [;]`
    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(ExpressionStatement::new(token, expression))
    }
}
