//! NetC language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`, `PunctuationId`) and look up spellings and
//! display names via the registry tables instead of comparing strings.
//!
//! ## Notes
//! - Registries are `const` data: built at compile time, never mutated.
//! - Each table is ordered by its id's discriminant, so lookups by id are plain indexing.
//!
//! ## Examples
//! ```rust
//! use netc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("network"), Some(KeywordId::Network));
//! assert_eq!(keywords::as_str(KeywordId::Network), "network");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
