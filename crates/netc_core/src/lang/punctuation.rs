//! Punctuation vocabulary: delimiters and separators.
//!
//! ## Examples
//! ```rust
//! use netc_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char(';'), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::name(PunctuationId::LBrace), "LBRACE");
//! ```

/// Stable identifier for punctuation tokens.
///
/// ## Notes
/// - The discriminant order matches [`PUNCTUATION`]; keep them in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Semicolon,
    Comma,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    pub name: &'static str,
}

/// Registry of all punctuation tokens, ordered by [`PunctuationId`] discriminant.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Semicolon, ';', "SEMICOLON"),
    info(PunctuationId::Comma, ',', "COMMA"),
    info(PunctuationId::LParen, '(', "LPAREN"),
    info(PunctuationId::RParen, ')', "RPAREN"),
    info(PunctuationId::LBrace, '{', "LBRACE"),
    info(PunctuationId::RBrace, '}', "RBRACE"),
    info(PunctuationId::LBracket, '[', "LBRACKET"),
    info(PunctuationId::RBracket, ']', "RBRACKET"),
];

/// Look up the metadata entry for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Source character.
pub fn as_char(id: PunctuationId) -> char {
    info_for(id).canonical
}

/// Display name used in token tables.
pub fn name(id: PunctuationId) -> &'static str {
    info_for(id).name
}

/// Resolve a single character to a punctuation id.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

const fn info(id: PunctuationId, canonical: char, name: &'static str) -> PunctuationInfo {
    PunctuationInfo { id, canonical, name }
}
