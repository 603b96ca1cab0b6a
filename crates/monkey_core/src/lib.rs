//! Provide the canonical language vocabulary shared by the Monkey scanner, parser and tooling.
//!
//! This crate is intentionally small and dependency-free. It answers “what is this spelling?” questions
//! (reserved words, operator symbols, punctuation) without knowing anything about tokens or trees.
//!
//! ## Notes
//!
//! - This is a vocabulary crate: **no IO**, no global mutable state, and no AST types.
//! - Syntax (what may appear where) is owned by `monkey_syntax`; this crate only records spellings and metadata.

pub mod lang;
