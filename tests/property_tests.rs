//! Property-based tests for the NetC frontend
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use netc::lexer::{self, TokenKind};
use netc::parser;
use netc_core::lang::keywords::{self, KeywordCategory};
use netc_core::lang::operators::OPERATORS;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Source fragments that glue together into scanner-friendly (and often parser-hostile) input.
const PIECES: &[&str] = &[
    "feed", "forward", "iterate", "until", "if", "else", "yield", "link", "network", "init", "text", "dnum",
    "cnum", "flag", "true", "false", "x", "_tmp", "port2", "feedx", "0", "42", "3.14", "7.", "\"hi there\"",
    "\"\"", "+", "-", "*", "/", "%", "=", "!", "<", ">", "&", "|", "^", "~", ";", ",", "(", ")", "{", "}", "[",
    "]", "# note\n", "@", "$", " ", " ", "\n", "\t",
];

fn source_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(PIECES), 0..60).prop_map(|pieces| pieces.concat())
}

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,10}"
}

fn operator_spelling_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(OPERATORS.iter().map(|info| info.spelling).collect::<Vec<_>>())
}

/// A short program of declarations and assignments that the grammar accepts.
fn program_strategy() -> impl Strategy<Value = String> {
    let name = ident_strategy().prop_filter("not a keyword", |s| keywords::from_str(s).is_none());
    prop::collection::vec((name, 0u32..1000), 1..8).prop_map(|decls| {
        let mut out = String::new();
        for (name, value) in decls {
            out.push_str(&format!("dnum {name} = {value};\n{name} = {name} + 1;\n"));
        }
        out
    })
}

// =============================================================================
// Scanner Properties
// =============================================================================

proptest! {
    /// Property: tokens cover the source; the only text between them is whitespace
    #[test]
    fn tokens_cover_source(source in source_strategy()) {
        let lexed = lexer::lex(&source);
        let mut cursor = 0;
        for token in &lexed.tokens {
            let gap = &source[cursor..token.span.start];
            prop_assert!(gap.chars().all(|c| c.is_ascii_whitespace()), "non-whitespace gap {:?}", gap);
            prop_assert_eq!(&source[token.span.start..token.span.end], token.lexeme.as_str());
            cursor = token.span.end;
        }
        prop_assert_eq!(cursor, source.len());
    }

    /// Property: token positions strictly increase
    #[test]
    fn positions_are_monotonic(source in source_strategy()) {
        let lexed = lexer::lex(&source);
        for pair in lexed.tokens.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!((a.line, a.column) < (b.line, b.column), "{:?} !< {:?}", a, b);
            prop_assert!(a.span.end <= b.span.start);
        }
    }

    /// Property: exactly one end-of-input token, always last
    #[test]
    fn single_trailing_eof(source in "\\PC{0,120}") {
        let lexed = lexer::lex(&source);
        let eofs = lexed.tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(lexed.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    /// Property: scanning and parsing are deterministic
    #[test]
    fn passes_are_idempotent(source in source_strategy()) {
        let first = lexer::lex(&source);
        let second = lexer::lex(&source);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(parser::parse(&first.tokens), parser::parse(&second.tokens));
    }

    /// Property: every operator spelling scans as exactly that operator
    #[test]
    fn operators_use_maximal_munch(spelling in operator_spelling_strategy()) {
        let source = format!("a {spelling} b");
        let lexed = lexer::lex(&source);
        let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
        prop_assert_eq!(kinds.len(), 4);
        prop_assert_eq!(kinds[0], TokenKind::Ident);
        prop_assert_eq!(lexed.tokens[1].lexeme.as_str(), spelling);
        prop_assert!(matches!(kinds[1], TokenKind::Operator(_)));
        prop_assert_eq!(kinds[2], TokenKind::Ident);
    }

    /// Property: a word is a keyword exactly when the registry says so
    #[test]
    fn keyword_vs_identifier(word in ident_strategy()) {
        let lexed = lexer::lex(&word);
        prop_assert_eq!(lexed.tokens.len(), 2);
        let expected = match keywords::from_str(&word) {
            Some(id) if keywords::category(id) == KeywordCategory::Literal => TokenKind::BoolLiteral,
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident,
        };
        prop_assert_eq!(lexed.tokens[0].kind, expected);
    }
}

// =============================================================================
// Parser Properties
// =============================================================================

proptest! {
    /// Property: the parser terminates on any input and acceptance matches an empty diagnostics list
    #[test]
    fn acceptance_matches_diagnostics(source in source_strategy()) {
        let lexed = lexer::lex(&source);
        let outcome = parser::parse(&lexed.tokens);
        prop_assert_eq!(outcome.accepted, outcome.errors.is_empty());
        prop_assert!(outcome.errors.iter().all(|e| e.is_syntax()));
    }

    /// Property: generated well-formed programs are accepted
    #[test]
    fn generated_programs_are_accepted(program in program_strategy()) {
        let lexed = lexer::lex(&program);
        prop_assert!(lexed.is_clean());
        let outcome = parser::parse(&lexed.tokens);
        prop_assert!(outcome.accepted, "rejected {:?}: {:?}", program, outcome.errors);
    }
}
