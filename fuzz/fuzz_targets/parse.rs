#![no_main]

use libfuzzer_sys::fuzz_target;
use netc::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let lexed = lexer::lex(s);
        let outcome = parser::parse(&lexed.tokens);
        assert_eq!(outcome.accepted, outcome.errors.is_empty());
    }
});
