//! Syntax frontend for the NetC language: token model, scanner, recognizer, diagnostics.
//!
//! Data flows one way: source text goes through [`lexer::lex`] into a token sequence terminated by a single
//! end-of-input token, and [`parser::parse`] checks that sequence against the grammar.
//!
//! ## Notes
//! - This crate is “syntax-only”: the recognizer accepts or rejects a program and reports diagnostics. It builds no
//!   tree, resolves no names and checks no types.
//! - Neither pass aborts on a fault. Diagnostics are collected as values and returned next to the result.
//! - Vocabulary (keyword spellings, operator names) comes from the `netc_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use netc_syntax::{lexer, parser};
//!
//! let lexed = lexer::lex("dnum x = 1 + 2; feed x; forward(x);");
//! assert!(lexed.is_clean());
//! let outcome = parser::parse(&lexed.tokens);
//! assert!(outcome.accepted);
//! assert!(outcome.errors.is_empty());
//! ```

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
