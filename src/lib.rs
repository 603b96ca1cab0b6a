#![forbid(unsafe_code)]
//! Monkey language front end
//!
//! Source text goes through the scanner ([`lexer`]) and the precedence-climbing parser ([`parser`]) and comes
//! out as an AST ([`ast::Program`]) plus a list of diagnostics. There is no evaluator here; drivers (a REPL,
//! an interpreter, a test harness) consume the tree.
//!
//! ## Panic Policy
//!
//! - **Production code**: failures are values. The scanner turns bad characters into `ILLEGAL` tokens and the
//!   parser records [`diagnostics::ParseError`]s and keeps going.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: registry lookups use `.expect("INVARIANT: reason")`, guarded by registry tests.
//!
//! ## Examples
//! ```rust
//! let output = monkey::parse("let answer = 6 * 7;");
//! assert!(output.is_ok());
//! assert_eq!(output.program.to_string(), "let answer = (6 * 7);");
//! ```

pub mod frontend;

pub use monkey_core::lang;
pub use monkey_syntax::{ast, config, diagnostics, lexer, parser};

pub use frontend::{FrontendError, check, render_diagnostics};
pub use monkey_syntax::config::ParserConfig;
pub use monkey_syntax::parser::{ParseOutput, parse, parse_with_config};
