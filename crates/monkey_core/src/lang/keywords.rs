//! Define the reserved keyword vocabulary for the Monkey language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records the source spelling, the token category name used in diagnostics,
//! and whether the parser currently understands the construct the keyword introduces.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `Let` and `LET` are identifiers.
//! - Keywords without parser support (`fn`, `true`, `false`, `if`, `else`) are still reserved, so they never
//!   scan as identifiers.
//!
//! ## Examples
//! ```rust
//! use monkey_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("fn"), Some(KeywordId::Fn));
//! assert_eq!(keywords::token_name(KeywordId::Fn), "FUNCTION");
//! assert_eq!(keywords::from_str("function"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Definitions / bindings
    Fn,
    Let,

    // Literals
    True,
    False,

    // Control flow
    If,
    Else,
    Return,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the only accepted source spelling.
/// - `token_name` is the upper-case category name shown in parser diagnostics (`expected next token to be LET`).
/// - `parsed` records whether the parser has a production for this keyword yet.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub token_name: &'static str,
    pub parsed: bool,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Fn, "fn", "FUNCTION", false),
    info(KeywordId::Let, "let", "LET", true),
    info(KeywordId::True, "true", "TRUE", false),
    info(KeywordId::False, "false", "FALSE", false),
    info(KeywordId::If, "if", "IF", false),
    info(KeywordId::Else, "else", "ELSE", false),
    info(KeywordId::Return, "return", "RETURN", true),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The source spelling of the keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Token category name used in diagnostics.
pub fn token_name(id: KeywordId) -> &'static str {
    info_for(id).token_name
}

/// Full metadata.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
///
/// ## Panics
/// - If the registry is missing an entry for `id` (guarded by the registry tests).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: keyword info missing")
}

/// Lookup by spelling.
///
/// ## Parameters
/// - `s`: Candidate keyword spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise.
#[allow(clippy::should_implement_trait)]
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str, token_name: &'static str, parsed: bool) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        token_name,
        parsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("return"), Some(KeywordId::Return));
        assert_eq!(from_str("Return"), None);
        assert_eq!(from_str("RETURN"), None);
    }

    #[test]
    fn test_only_let_and_return_are_parsed() {
        let parsed: Vec<KeywordId> = KEYWORDS.iter().filter(|k| k.parsed).map(|k| k.id).collect();
        assert_eq!(parsed, vec![KeywordId::Let, KeywordId::Return]);
    }
}
