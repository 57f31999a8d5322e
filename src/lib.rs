#![forbid(unsafe_code)]
//! NetC Language Toolchain
//!
//! NetC is a small imperative language for network programs. This crate ties the frontend together: the scanner
//! turns source text into classified tokens, and the recognizer checks those tokens against the grammar and reports
//! every fault it meets. The `netc` binary drives both phases over a file.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Source faults are not panics**: lexical and syntax faults are collected as `CompileError` values and never
//!   abort a pass.

pub mod cli;

pub use netc_syntax::diagnostics;
pub use netc_syntax::lexer;
pub use netc_syntax::parser;
pub use netc_syntax::token_helpers;
