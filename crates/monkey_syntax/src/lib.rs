//! Syntax frontend for the Monkey language: lexer, parser, AST, diagnostics.
//!
//! The pipeline is pull-based: the parser asks the [`lexer::Lexer`] for one token at a time and builds a
//! [`ast::Program`] while collecting [`diagnostics::ParseError`]s instead of stopping at the first problem.
//!
//! ## Notes
//! - This crate is “syntax-only”: there is no evaluator, no environment, and no type checking.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `monkey_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use monkey_syntax::parser;
//!
//! let output = parser::parse("let x = 1 + 2 * 3;");
//! assert!(output.errors.is_empty());
//! assert_eq!(output.program.to_string(), "let x = (1 + (2 * 3));");
//! ```

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
