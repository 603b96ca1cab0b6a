//! Punctuation vocabulary.
//!
//! Delimiters and separators: the tokens that structure source text without being operators.
//!
//! ## Examples
//! ```rust
//! use monkey_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_str(PunctuationId::LBrace), "{");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Comma,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
}

/// Registry of all punctuation.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    punct(PunctuationId::Comma, ","),
    punct(PunctuationId::Semicolon, ";"),
    punct(PunctuationId::LParen, "("),
    punct(PunctuationId::RParen, ")"),
    punct(PunctuationId::LBrace, "{"),
    punct(PunctuationId::RBrace, "}"),
];

/// Metadata for `id`.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (guarded by the registry tests).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: punctuation info missing")
}

/// Source spelling of a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Lookup by spelling.
#[allow(clippy::should_implement_trait)]
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn punct(id: PunctuationId, canonical: &'static str) -> PunctuationInfo {
    PunctuationInfo { id, canonical }
}
