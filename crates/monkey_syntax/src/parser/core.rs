/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, the binding-power ladder ([`Precedence`]) and the top-level
/// `parse_program()` loop.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Binding power of a token in infix position, lowest first.
///
/// An infix operator joins the left operand being built only if its precedence is strictly higher than the
/// minimum the caller asked for. Equal precedence stops the loop, which makes same-level operators
/// left-associative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// `-x`, `!x`
    Prefix,
    /// Reserved for call expressions; nothing binds at this level yet.
    Call,
}

impl Precedence {
    /// Precedence of `kind` when it follows an operand. Tokens that are not infix operators bind at
    /// [`Precedence::Lowest`].
    pub fn of(kind: &TokenKind) -> Precedence {
        match kind {
            TokenKind::Operator(OperatorId::Eq | OperatorId::NotEq) => Precedence::Equals,
            TokenKind::Operator(OperatorId::Lt | OperatorId::Gt) => Precedence::LessGreater,
            TokenKind::Operator(OperatorId::Plus | OperatorId::Minus) => Precedence::Sum,
            TokenKind::Operator(OperatorId::Asterisk | OperatorId::Slash) => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

/// Parser state.
///
/// ## Notes
/// - The parser keeps exactly one token of lookahead (`peek_token`) and pulls from the lexer on demand.
/// - Failures never abort the parse: they are recorded in `errors` and the parser skips to the end of the
///   offending statement.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<ParseError>,
    config: ParserConfig,
    /// Current `parse_expression` nesting.
    depth: usize,
    /// End offset of the token before `cur_token`, for line-break detection during recovery.
    prev_token_end: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default [`ParserConfig`].
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self::with_config(lexer, ParserConfig::default())
    }

    /// Create a parser with an explicit configuration.
    ///
    /// Reads two tokens so that both `cur_token` and `peek_token` are populated.
    pub fn with_config(mut lexer: Lexer<'a>, config: ParserConfig) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();
        Self {
            lexer,
            cur_token,
            peek_token,
            errors: Vec::new(),
            config,
            depth: 0,
            prev_token_end: 0,
        }
    }

    /// Parse statements until end of input.
    ///
    /// Statements that fail to parse are left out of the returned [`Program`]; the reason is available
    /// from [`Parser::errors`].
    #[tracing::instrument(skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.cur_token_is(&TokenKind::Eof) {
            let statement_start = self.cur_token.span.start;
            match self.parse_statement() {
                Some(stmt) => {
                    tracing::trace!(statement = %stmt, "parsed statement");
                    statements.push(stmt);
                    self.next_token();
                }
                None => self.synchronize(statement_start),
            }
        }

        Program::new(statements)
    }

    /// Diagnostics recorded so far, in the order they were found.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consume the parser, returning its diagnostics.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}
