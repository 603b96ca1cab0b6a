//! Abstract Syntax Tree definitions for Monkey.
//!
//! Statements and expressions are separate sum types, so a node can never play both roles. Every node keeps
//! the token that began its production; rendering goes through [`fmt::Display`] and fully parenthesizes
//! prefix and infix expressions so that operator grouping is visible in the output.
//!
//! Nodes are built once by the parser through constructors that take every child, and are never mutated
//! afterwards. Children are owned exclusively by their parent (`Box` for recursive positions).

use std::fmt;

use crate::lexer::Token;

/// Source location span (byte offsets, end exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Capabilities shared by every AST node.
pub trait Node: fmt::Display {
    /// Literal text of the token that began this node's production.
    fn token_literal(&self) -> &str;

    /// Source range covered by this node.
    fn span(&self) -> Span;
}

// ============================================================================
// Program
// ============================================================================

/// A program is an ordered sequence of statements, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    /// The first statement's token literal, or `""` for an empty program.
    fn token_literal(&self) -> &str {
        self.statements.first().map_or("", |s| s.token_literal())
    }

    fn span(&self) -> Span {
        match (self.statements.first(), self.statements.last()) {
            (Some(first), Some(last)) => first.span().merge(last.span()),
            _ => Span::default(),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Statements bring their own trailing punctuation; no separators here.
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(s) => &s.token.literal,
            Statement::Return(s) => &s.token.literal,
            Statement::Expression(s) => &s.token.literal,
        }
    }

    fn span(&self) -> Span {
        match self {
            Statement::Let(s) => s.token.span.merge(s.value.span()),
            Statement::Return(s) => s.token.span.merge(s.return_value.span()),
            Statement::Expression(s) => s.expression.span(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(s) => write!(f, "{} {} = {};", s.token.literal, s.name, s.value),
            Statement::Return(s) => write!(f, "{} {};", s.token.literal, s.return_value),
            Statement::Expression(s) => write!(f, "{}", s.expression),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

impl LetStatement {
    pub fn new(token: Token, name: Identifier, value: Expression) -> Self {
        Self { token, name, value }
    }
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub return_value: Expression,
}

impl ReturnStatement {
    pub fn new(token: Token, return_value: Expression) -> Self {
        Self { token, return_value }
    }
}

/// A bare expression used as a statement (`x + 1;`).
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// First token of the expression.
    pub token: Token,
    pub expression: Expression,
}

impl ExpressionStatement {
    pub fn new(token: Token, expression: Expression) -> Self {
        Self { token, expression }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(e) => &e.token.literal,
            Expression::IntegerLiteral(e) => &e.token.literal,
            Expression::Prefix(e) => &e.token.literal,
            Expression::Infix(e) => &e.token.literal,
        }
    }

    fn span(&self) -> Span {
        match self {
            Expression::Identifier(e) => e.token.span,
            Expression::IntegerLiteral(e) => e.token.span,
            Expression::Prefix(e) => e.token.span.merge(e.right.span()),
            Expression::Infix(e) => e.left.span().merge(e.right.span()),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(e) => write!(f, "{}", e),
            Expression::IntegerLiteral(e) => write!(f, "{}", e.token.literal),
            Expression::Prefix(e) => write!(f, "({}{})", e.operator, e.right),
            Expression::Infix(e) => write!(f, "({} {} {})", e.left, e.operator, e.right),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    /// Build an identifier whose name is the token's literal.
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer literal. Renders as the source digits, so `007` stays `007`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

impl IntegerLiteral {
    pub fn new(token: Token, value: i64) -> Self {
        Self { token, value }
    }
}

/// `<operator><right>`, e.g. `-x` or `!ok`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expression>,
}

impl PrefixExpression {
    /// Build a prefix expression; the operator spelling is taken from `token`.
    pub fn new(token: Token, right: Expression) -> Self {
        let operator = token.literal.clone();
        Self {
            token,
            operator,
            right: Box::new(right),
        }
    }
}

/// `<left> <operator> <right>`; `token` is the operator token.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

impl InfixExpression {
    pub fn new(token: Token, left: Expression, right: Expression) -> Self {
        let operator = token.literal.clone();
        Self {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}
