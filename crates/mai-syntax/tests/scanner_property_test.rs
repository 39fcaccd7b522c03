//! Property-based scanner tests
//!
//! Invariants that hold for every input, checked with `proptest` over
//! arbitrary text and over text built from Mai's own characters.

use mai_syntax::lexer::{tokenize, TokenKind};
use proptest::prelude::*;

/// Characters that reach every scanner path: operators, both comment
/// forms, both quotes, digits with dots, identifiers and line breaks.
fn mai_like_source() -> impl Strategy<Value = String> {
    "[a-z_0-9 .\"'/*(){},;+\\-=!<>\n\t@#]{0,200}"
}

fn config() -> ProptestConfig {
    let default = ProptestConfig::default();
    ProptestConfig {
        cases: default.cases.max(512),
        ..default
    }
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn scanner_never_panics(input in "\\PC{0,500}") {
        let _scanned = tokenize(&input);
    }

    #[test]
    fn scan_ends_with_newline_then_eof(input in "\\PC{0,300}") {
        let tokens = tokenize(&input).tokens;
        let n = tokens.len();
        prop_assert!(n >= 2);
        prop_assert_eq!(tokens[n - 2].kind, TokenKind::Newline);
        prop_assert_eq!(tokens[n - 1].kind, TokenKind::Eof);
        prop_assert_eq!(tokens[n - 1].lexeme.as_str(), "");
        prop_assert!(tokens[..n - 1].iter().all(|t| t.kind != TokenKind::Eof));
    }

    #[test]
    fn lexemes_match_their_spans(input in "\\PC{0,300}") {
        for token in tokenize(&input).tokens {
            prop_assert!(token.span.end <= input.len());
            prop_assert_eq!(token.lexeme.as_str(), &input[token.span.start..token.span.end]);
        }
    }

    #[test]
    fn lexemes_match_their_spans_on_mai_text(input in mai_like_source()) {
        for token in tokenize(&input).tokens {
            prop_assert_eq!(token.lexeme.as_str(), &input[token.span.start..token.span.end]);
        }
    }

    #[test]
    fn lines_never_decrease(input in mai_like_source()) {
        let tokens = tokenize(&input).tokens;
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
        let eof = &tokens[tokens.len() - 1];
        prop_assert_eq!(eof.line, input.matches('\n').count() + 1);
    }

    #[test]
    fn spans_do_not_overlap(input in mai_like_source()) {
        let tokens = tokenize(&input).tokens;
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    #[test]
    fn scanning_is_deterministic(input in "\\PC{0,200}") {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }
}
