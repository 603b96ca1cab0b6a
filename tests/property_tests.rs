//! Property-based tests for the Monkey front end
//!
//! These tests use proptest to check that scanning and parsing never panic and that rendering only adds
//! grouping parentheses to the source it came from.

use monkey::lexer::{self, TokenKind};
use monkey::parser;
use proptest::prelude::*;

// Strategy for generating identifiers that are not reserved words
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z_]{0,6}".prop_filter("Not a keyword", |s| {
        !matches!(s.as_str(), "fn" | "let" | "true" | "false" | "if" | "else" | "return")
    })
}

fn operand_strategy() -> impl Strategy<Value = String> {
    prop_oneof![ident_strategy(), (0u32..100_000).prop_map(|n| n.to_string())]
}

// Strategy for generating well-formed expressions out of operands and operators
fn expression_strategy() -> impl Strategy<Value = String> {
    operand_strategy().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            (prop::sample::select(vec!["-", "!"]), inner.clone()).prop_map(|(op, e)| format!("{}{}", op, e)),
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "<", ">", "==", "!="]),
                inner
            )
                .prop_map(|(l, op, r)| format!("{} {} {}", l, op, r)),
        ]
    })
}

proptest! {
    /// Property: the scanner terminates on any input with exactly one trailing EOF
    #[test]
    fn lexing_always_ends_with_single_eof(source in "\\PC{0,64}") {
        let tokens = lexer::lex(&source);
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
    }

    /// Property: token literals are exactly the source text under their spans
    #[test]
    fn token_literals_match_spans(source in "[a-z0-9 =!+*/<>(){},;@-]{0,48}") {
        for token in lexer::lex(&source) {
            prop_assert_eq!(&source[token.span.start..token.span.end], token.literal.as_str());
        }
    }

    /// Property: the parser never panics on arbitrary token soup
    #[test]
    fn parsing_arbitrary_input_does_not_panic(source in "[a-z0-9 =!+*/<>(){},;@-]{0,48}") {
        let output = parser::parse(&source);
        let _ = output.program.to_string();
    }

    /// Property: rendering keeps every token in source order and adds one pair of parentheses per operator
    #[test]
    fn rendering_parenthesizes_each_operator(expr in expression_strategy()) {
        let output = parser::parse(&expr);
        prop_assert!(output.is_ok(), "{:?}: {:?}", expr, output.error_messages());
        let rendered = output.program.to_string();

        let operator_count = lexer::lex(&expr)
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::Operator(_)))
            .count();
        prop_assert_eq!(rendered.matches('(').count(), operator_count);
        prop_assert_eq!(rendered.matches(')').count(), operator_count);

        let strip = |s: &str| s.chars().filter(|c| !matches!(c, '(' | ')' | ' ')).collect::<String>();
        prop_assert_eq!(strip(&rendered), strip(&expr));
    }
}
