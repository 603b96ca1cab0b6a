//! Monkey language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`) and look up spellings and
//! metadata via the const tables in each module, instead of comparing strings at every call site.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings for diagnostics and tests.
//!
//! ## Examples
//! ```rust
//! use monkey_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("let"), Some(KeywordId::Let));
//! assert_eq!(keywords::as_str(KeywordId::Let), "let");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
