//! Define the reserved keyword vocabulary for the NetC language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, display names and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Feed` is an identifier, `feed` is a keyword.
//! - `true` / `false` are registered here so the scanner has one table to consult, but they carry
//!   [`KeywordCategory::Literal`]; the token layer turns them into boolean literals, never keyword tokens.
//!
//! ## Examples
//! ```rust
//! use netc_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("dnum"), Some(KeywordId::Dnum));
//! assert_eq!(keywords::category(KeywordId::Dnum), KeywordCategory::DataType);
//! assert_eq!(keywords::from_str("dnum1"), None);
//! ```

/// Stable identifier for every reserved word.
///
/// ## Notes
/// - The discriminant order matches [`KEYWORDS`]; keep them in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Statements
    Feed,
    Forward,
    Iterate,
    Until,
    If,
    Else,
    Yield,
    Link,

    // Definitions
    Network,
    Init,

    // Data types
    Text,
    Dnum,
    Cnum,
    Flag,

    // Literals
    True,
    False,
}

/// High-level grouping of reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Introduces a statement (`feed`, `if`, `yield`, ...).
    Statement,
    /// Introduces a function definition (`network`, `init`).
    Definition,
    /// Primitive data type (`text`, `dnum`, `cnum`, `flag`).
    DataType,
    /// Boolean literal spelling (`true`, `false`).
    Literal,
}

/// Metadata for a keyword.
///
/// ## Notes
/// - `canonical` is the only accepted spelling.
/// - `name` is the upper-case tag printed in token tables and diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub name: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords, ordered by [`KeywordId`] discriminant.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Statements
    info(KeywordId::Feed, "feed", "FEED", KeywordCategory::Statement),
    info(KeywordId::Forward, "forward", "FORWARD", KeywordCategory::Statement),
    info(KeywordId::Iterate, "iterate", "ITERATE", KeywordCategory::Statement),
    info(KeywordId::Until, "until", "UNTIL", KeywordCategory::Statement),
    info(KeywordId::If, "if", "IF", KeywordCategory::Statement),
    info(KeywordId::Else, "else", "ELSE", KeywordCategory::Statement),
    info(KeywordId::Yield, "yield", "YIELD", KeywordCategory::Statement),
    info(KeywordId::Link, "link", "LINK", KeywordCategory::Statement),
    // Definitions
    info(KeywordId::Network, "network", "NETWORK", KeywordCategory::Definition),
    info(KeywordId::Init, "init", "INIT", KeywordCategory::Definition),
    // Data types
    info(KeywordId::Text, "text", "TEXT", KeywordCategory::DataType),
    info(KeywordId::Dnum, "dnum", "DNUM", KeywordCategory::DataType),
    info(KeywordId::Cnum, "cnum", "CNUM", KeywordCategory::DataType),
    info(KeywordId::Flag, "flag", "FLAG", KeywordCategory::DataType),
    // Literals
    info(KeywordId::True, "true", "BOOLEAN_LITERAL", KeywordCategory::Literal),
    info(KeywordId::False, "false", "BOOLEAN_LITERAL", KeywordCategory::Literal),
];

/// Look up the metadata entry for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The spelling as written in source (e.g. `"network"`).
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Display name used in token tables (e.g. `"NETWORK"`).
pub fn name(id: KeywordId) -> &'static str {
    info_for(id).name
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if the keyword names a primitive data type.
pub fn is_data_type(id: KeywordId) -> bool {
    category(id) == KeywordCategory::DataType
}

/// Resolve a spelling to a keyword id.
///
/// ## Parameters
/// - `spelling`: Candidate identifier text.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved.
/// - `None` otherwise (the spelling is an ordinary identifier).
pub fn from_str(spelling: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == spelling).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, name: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        name,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ordered_by_id() {
        for (index, k) in KEYWORDS.iter().enumerate() {
            assert_eq!(k.id as usize, index, "KEYWORDS out of order at {:?}", k.id);
        }
    }

    #[test]
    fn test_spellings_round_trip() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id));
            assert_eq!(as_str(k.id), k.canonical);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("Feed"), None);
        assert_eq!(from_str("IF"), None);
        assert_eq!(from_str("network1"), None);
    }

    #[test]
    fn test_data_types() {
        let data_types: Vec<_> = KEYWORDS.iter().filter(|k| is_data_type(k.id)).map(|k| k.canonical).collect();
        assert_eq!(data_types, vec!["text", "dnum", "cnum", "flag"]);
    }

    #[test]
    fn test_boolean_spellings_are_literals() {
        assert_eq!(category(KeywordId::True), KeywordCategory::Literal);
        assert_eq!(category(KeywordId::False), KeywordCategory::Literal);
        assert_eq!(name(KeywordId::True), "BOOLEAN_LITERAL");
    }
}
