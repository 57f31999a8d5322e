//! Token types for the NetC scanner.
//!
//! Vocabulary tokens carry **registry-backed IDs**:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators (every combined form is its own id)
//! - `Punctuation(PunctuationId)` for delimiters
//!
//! ## Notes
//! - Tokens are immutable values; the scanner creates them and the sequence that holds them owns them.
//! - A token's `lexeme` is the exact source text it was made from; literal values are not decoded here.
//! - Use `crate::token_helpers` for the grammar-level predicates (`is_data_type`, `is_add_op`, ...).

use std::fmt;

use netc_core::lang::keywords::{self, KeywordCategory, KeywordId};
use netc_core::lang::operators::{self, OperatorId};
use netc_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// SPANS
// ============================================================================

/// Byte range of a token in the source text (`start..end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the scanner.
///
/// ## Notes
/// - `true` / `false` are [`TokenKind::BoolLiteral`]; `Keyword(KeywordId::True)` is never produced.
/// - Match on this exhaustively so new kinds surface as compile errors at every dispatch site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Vocabulary (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Literals ==========
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    BoolLiteral,

    // ========== Names ==========
    Ident,

    // ========== Special ==========
    Comment,
    Eof,
    Unknown,
}

impl TokenKind {
    /// Upper-case tag printed in token tables and diagnostics (`PLUS_ASSIGN`, `IDENTIFIER`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => keywords::name(*id),
            TokenKind::Operator(id) => operators::name(*id),
            TokenKind::Punctuation(id) => punctuation::name(*id),
            TokenKind::IntLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::BoolLiteral => "BOOLEAN_LITERAL",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::Comment => "COMMENT",
            TokenKind::Eof => "END_OF_FILE",
            TokenKind::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: its kind, the exact source text, and where that text starts.
///
/// `line` and `column` are 1-based and point at the first character of the lexeme; `column` counts characters,
/// not bytes. The end-of-input token has an empty lexeme and the position just past the last character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            span,
        }
    }
}

/// Resolve an identifier spelling to the token kind the keyword table assigns it, if reserved.
///
/// Boolean spellings resolve to [`TokenKind::BoolLiteral`] rather than a keyword kind.
pub fn keyword_kind(spelling: &str) -> Option<TokenKind> {
    let id = keywords::from_str(spelling)?;
    Some(match keywords::category(id) {
        KeywordCategory::Literal => TokenKind::BoolLiteral,
        KeywordCategory::Statement | KeywordCategory::Definition | KeywordCategory::DataType => {
            TokenKind::Keyword(id)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_kind() {
        assert_eq!(keyword_kind("network"), Some(TokenKind::Keyword(KeywordId::Network)));
        assert_eq!(keyword_kind("true"), Some(TokenKind::BoolLiteral));
        assert_eq!(keyword_kind("false"), Some(TokenKind::BoolLiteral));
        assert_eq!(keyword_kind("network1"), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(TokenKind::Operator(OperatorId::PlusAssign).name(), "PLUS_ASSIGN");
        assert_eq!(TokenKind::Punctuation(PunctuationId::Semicolon).to_string(), "SEMICOLON");
        assert_eq!(TokenKind::Keyword(KeywordId::Dnum).name(), "DNUM");
        assert_eq!(TokenKind::Eof.name(), "END_OF_FILE");
        assert_eq!(TokenKind::Ident.name(), "IDENTIFIER");
    }
}
