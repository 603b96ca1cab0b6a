//! Parser for the Monkey programming language
//!
//! Pulls tokens from a [`Lexer`] and builds a [`Program`]. Statements are dispatched on their first token;
//! expressions are parsed by precedence climbing (Pratt parsing): each token category may own a *prefix* rule
//! (it starts an expression) and an *infix* rule (it extends an already-parsed left operand), and a per-category
//! binding power decides how far an infix operator reaches.
//!
//! ## Examples
//!
//! ```rust
//! use monkey_syntax::parser;
//!
//! let output = parser::parse("-a * b + c;");
//! assert!(output.is_ok());
//! assert_eq!(output.program.to_string(), "(((-a) * b) + c)");
//! ```

use crate::ast::*;
use crate::config::ParserConfig;
use crate::diagnostics::ParseError;
use crate::lexer::{Lexer, Token, TokenKind};
use monkey_core::lang::keywords::KeywordId;
use monkey_core::lang::operators::{self, Fixity, OperatorId};
use monkey_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
