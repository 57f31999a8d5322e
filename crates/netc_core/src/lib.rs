//! Canonical language vocabulary for the NetC toolchain.
//!
//! This crate is intentionally tiny and dependency-free. It holds the const registries that both the scanner and
//! the diagnostic/dump formatters consult, so there is exactly one place that knows how a reserved word is spelled
//! or what a token kind is called when printed.
//!
//! ## Notes
//!
//! - This is a “vocabulary” crate: **no IO**, no global mutable state, no tokenizer.

pub mod lang;
