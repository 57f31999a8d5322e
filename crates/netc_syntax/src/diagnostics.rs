//! Diagnostics for the NetC frontend.
//!
//! Both the scanner and the recognizer report faults as [`CompileError`] values pushed onto a list. Reporting never
//! alters control flow: the pass keeps going and the caller inspects the list afterwards.
//!
//! Two renderings are provided:
//! - [`format_error`]: the plain console form (`Parse Error at line L, column C: ...` plus the offending token).
//! - [`render_error`]: a `miette` graphical report with the source line and a caret under the fault.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, NamedSource, Report};
use thiserror::Error;

use crate::lexer::{Span, Token, TokenKind};

/// Fault category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown character or unterminated string literal.
    Lexical,
    /// An expected token or construct was not found.
    Syntax,
}

impl ErrorKind {
    /// Stable diagnostic code shown by the graphical renderer.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Lexical => "netc::lexical",
            ErrorKind::Syntax => "netc::syntax",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "Lexical Error"),
            ErrorKind::Syntax => write!(f, "Parse Error"),
        }
    }
}

/// The token a syntax fault was raised at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub kind: TokenKind,
    pub lexeme: String,
}

/// A fault with its source location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at line {line}, column {column}: {message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub span: Span,
    pub found: Option<Found>,
}

impl CompileError {
    pub fn lexical(message: impl Into<String>, line: usize, column: usize, span: Span) -> Self {
        Self {
            kind: ErrorKind::Lexical,
            message: message.into(),
            line,
            column,
            span,
            found: None,
        }
    }

    /// A syntax fault positioned at `token`, recording its kind and lexeme.
    pub fn syntax(message: impl Into<String>, token: &Token) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            line: token.line,
            column: token.column,
            span: token.span,
            found: Some(Found {
                kind: token.kind,
                lexeme: token.lexeme.clone(),
            }),
        }
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.found
            .as_ref()
            .map(|found| Box::new(format!("found {} ('{}')", found.kind, found.lexeme)) as Box<dyn fmt::Display + 'a>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new_with_span(Some(self.message.clone()), self.span);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Format an error for plain console output.
///
/// Syntax faults get a second line naming the offending token:
///
/// ```text
/// Parse Error at line 1, column 10: Expected expression
///   Found: SEMICOLON (';')
/// ```
pub fn format_error(error: &CompileError) -> String {
    match &error.found {
        Some(found) => format!("{}\n  Found: {} ('{}')", error, found.kind, found.lexeme),
        None => error.to_string(),
    }
}

/// Render an error as a graphical report with the offending source line.
pub fn render_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    format!("{report:?}")
}

// ============================================================================
// Error catalog
// ============================================================================

/// Constructors for the faults the frontend raises, so message wording lives in one place.
pub mod errors {
    use super::*;

    pub fn unknown_character(c: char, line: usize, column: usize, span: Span) -> CompileError {
        CompileError::lexical(format!("Unknown character '{}'", c), line, column, span)
    }

    pub fn unterminated_string(line: usize, column: usize, span: Span) -> CompileError {
        CompileError::lexical("Unterminated string", line, column, span)
    }

    pub fn nesting_too_deep(limit: usize, token: &Token) -> CompileError {
        CompileError::syntax(format!("Nesting too deep (limit {})", limit), token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netc_core::lang::punctuation::PunctuationId;

    fn semicolon_at(line: usize, column: usize, offset: usize) -> Token {
        Token::new(
            TokenKind::Punctuation(PunctuationId::Semicolon),
            ";",
            line,
            column,
            Span::new(offset, offset + 1),
        )
    }

    #[test]
    fn test_syntax_error_console_format() {
        let err = CompileError::syntax("Expected expression", &semicolon_at(1, 10, 9));
        assert_eq!(
            format_error(&err),
            "Parse Error at line 1, column 10: Expected expression\n  Found: SEMICOLON (';')"
        );
    }

    #[test]
    fn test_lexical_error_console_format() {
        let err = errors::unknown_character('@', 2, 3, Span::new(7, 8));
        assert_eq!(format_error(&err), "Lexical Error at line 2, column 3: Unknown character '@'");
        assert!(!err.is_syntax());
    }

    #[test]
    fn test_diagnostic_metadata() {
        let err = CompileError::syntax("Expected ';' after feed statement", &semicolon_at(1, 1, 0));
        assert_eq!(err.code().map(|c| c.to_string()).as_deref(), Some("netc::syntax"));
        assert_eq!(err.help().map(|h| h.to_string()).as_deref(), Some("found SEMICOLON (';')"));
        let labels: Vec<_> = err.labels().into_iter().flatten().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 0);
        assert_eq!(labels[0].len(), 1);
    }

    #[test]
    fn test_render_error_mentions_message() {
        let source = "feed 5;";
        let token = Token::new(TokenKind::IntLiteral, "5", 1, 6, Span::new(5, 6));
        let err = CompileError::syntax("Expected identifier after 'feed'", &token);
        let rendered = render_error("demo.netc", source, &err);
        assert!(rendered.contains("Expected identifier after 'feed'"), "{rendered}");
    }
}
