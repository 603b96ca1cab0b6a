//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the positions each operator may take
//! (prefix, infix). Binding power is deliberately **not** recorded here: precedence is owned by the parser.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact. Two-character operators (`==`, `!=`) are distinct ids, not
//!   combinations of their one-character prefixes.
//! - `=` is listed for completeness; it only appears in `let` bindings and has no expression fixity.
//!
//! ## Examples
//! ```rust
//! use monkey_core::lang::operators::{self, Fixity, OperatorId};
//!
//! assert_eq!(operators::from_str("!="), Some(OperatorId::NotEq));
//! assert!(operators::has_fixity(OperatorId::Minus, Fixity::Prefix));
//! assert!(operators::has_fixity(OperatorId::Minus, Fixity::Infix));
//! ```

/// Define whether an operator may start an expression or join two of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Prefix,
    Infix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Binding
    Assign,

    // Arithmetic
    Plus,
    Minus,
    Asterisk,
    Slash,

    // Logical
    Bang,

    // Comparison
    Lt,
    Gt,
    Eq,
    NotEq,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub fixity: &'static [Fixity],
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Assign, "=", &[]),
    op(OperatorId::Plus, "+", &[Fixity::Infix]),
    op(OperatorId::Minus, "-", &[Fixity::Prefix, Fixity::Infix]),
    op(OperatorId::Asterisk, "*", &[Fixity::Infix]),
    op(OperatorId::Slash, "/", &[Fixity::Infix]),
    op(OperatorId::Bang, "!", &[Fixity::Prefix]),
    op(OperatorId::Lt, "<", &[Fixity::Infix]),
    op(OperatorId::Gt, ">", &[Fixity::Infix]),
    op(OperatorId::Eq, "==", &[Fixity::Infix]),
    op(OperatorId::NotEq, "!=", &[Fixity::Infix]),
];

/// Metadata for `id`.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (guarded by the registry tests).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: operator info missing")
}

/// Source spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return `true` if `id` may appear in the given position.
pub fn has_fixity(id: OperatorId, fixity: Fixity) -> bool {
    info_for(id).fixity.contains(&fixity)
}

/// Lookup by spelling.
#[allow(clippy::should_implement_trait)]
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

const fn op(id: OperatorId, spelling: &'static str, fixity: &'static [Fixity]) -> OperatorInfo {
    OperatorInfo { id, spelling, fixity }
}
