//! Scanner for the NetC programming language
//!
//! A single left-to-right pass over the source that produces a classified token sequence:
//! - Keywords and identifiers (via the `netc_core` keyword table)
//! - Integer, float, string and boolean literals
//! - Operators, using maximal munch with at most one character of lookahead
//! - Delimiters and `#` line comments (kept as tokens; consumers filter them)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Span)
//! - `literals` - String and numeric literal scanning
//!
//! ## Notes
//! - The scanner is error tolerant: unknown characters become `Unknown` tokens and an unterminated string is
//!   reported and skipped. The returned sequence always ends in exactly one `Eof` token.

mod literals;
pub mod tokens;

pub use tokens::{Span, Token, TokenKind, keyword_kind};

use crate::diagnostics::{CompileError, errors};
use netc_core::lang::operators::OperatorId;
use netc_core::lang::punctuation;

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Two cursors walk the source: `start_*` marks the first character of the
// lexeme being built and `current_pos` the next character to read. `line` and
// `column` follow `current_pos`; a consumed '\n' bumps `line` and resets
// `column` to 1.
// ============================================================================

/// Output of a scan: the token sequence plus every lexical fault met on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub errors: Vec<CompileError>,
}

impl Lexed {
    /// Return `true` if no lexical fault was reported.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Scanner for NetC source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    column: usize,
    start_pos: usize,
    start_line: usize,
    start_column: usize,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            column: 1,
            start_pos: 0,
            start_line: 1,
            start_column: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// Never fails outright: faults are collected in [`Lexed::errors`] and the token stream always ends with an
    /// `Eof` token stamped with the final line and column.
    pub fn tokenize(mut self) -> Lexed {
        while !self.is_at_end() {
            self.start_pos = self.current_pos;
            self.start_line = self.line;
            self.start_column = self.column;
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            "",
            self.line,
            self.column,
            Span::new(self.current_pos, self.current_pos),
        ));

        Lexed {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Delimiters
            ';' | ',' | '(' | ')' | '{' | '}' | '[' | ']' => {
                if let Some(id) = punctuation::from_char(c) {
                    self.add_token(TokenKind::Punctuation(id));
                }
            }

            // Single-character operators
            '~' => self.add_op(OperatorId::BitNot),
            '^' => self.add_op(OperatorId::BitXor),
            '%' => self.add_op(OperatorId::Modulo),

            // Operators that may combine with the next character
            '+' => self.operator(
                OperatorId::Plus,
                &[('+', OperatorId::Increment), ('=', OperatorId::PlusAssign)],
            ),
            '-' => self.operator(
                OperatorId::Minus,
                &[('-', OperatorId::Decrement), ('=', OperatorId::MinusAssign)],
            ),
            '*' => self.operator(OperatorId::Multiply, &[('=', OperatorId::MultAssign)]),
            '/' => self.operator(OperatorId::Divide, &[('=', OperatorId::DivAssign)]),
            '!' => self.operator(OperatorId::Not, &[('=', OperatorId::NotEq)]),
            '=' => self.operator(OperatorId::Assign, &[('=', OperatorId::Eq)]),
            '<' => self.operator(
                OperatorId::Lt,
                &[('<', OperatorId::LeftShift), ('=', OperatorId::LtEq)],
            ),
            '>' => self.operator(
                OperatorId::Gt,
                &[('>', OperatorId::RightShift), ('=', OperatorId::GtEq)],
            ),
            '&' => self.operator(OperatorId::BitAnd, &[('&', OperatorId::And)]),
            '|' => self.operator(OperatorId::BitOr, &[('|', OperatorId::Or)]),

            // Comments run to the end of the line; the newline is left for the next token
            '#' => {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
                self.add_token(TokenKind::Comment);
            }

            // Strings
            '"' => self.scan_string(),

            // Numbers
            '0'..='9' => self.scan_number(),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(),

            // Whitespace (newlines already bumped the line counter in `advance`)
            _ if c.is_ascii_whitespace() => {}

            _ => {
                let err = errors::unknown_character(c, self.start_line, self.start_column, self.lexeme_span());
                tracing::trace!(line = err.line, column = err.column, "{}", err.message);
                self.errors.push(err);
                self.add_token(TokenKind::Unknown);
            }
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn lexeme_span(&self) -> Span {
        Span::new(self.start_pos, self.current_pos)
    }

    fn add_token(&mut self, kind: TokenKind) {
        let span = self.lexeme_span();
        self.tokens.push(Token::new(
            kind,
            &self.source[span.start..span.end],
            self.start_line,
            self.start_column,
            span,
        ));
    }

    fn add_op(&mut self, id: OperatorId) {
        self.add_token(TokenKind::Operator(id));
    }

    /// Try each two-character form in order, falling back to the single-character operator.
    fn operator(&mut self, simple: OperatorId, compounds: &[(char, OperatorId)]) {
        for (c, id) in compounds {
            if self.match_char(*c) {
                self.add_op(*id);
                return;
            }
        }
        self.add_op(simple);
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[self.start_pos..self.current_pos];
        let kind = keyword_kind(spelling).unwrap_or(TokenKind::Ident);
        self.add_token(kind);
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scan a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Lexed {
    let lexed = Lexer::new(source).tokenize();
    tracing::debug!(
        tokens = lexed.tokens.len(),
        errors = lexed.errors.len(),
        "scan finished"
    );
    lexed
}

// ============================================================================
// TESTS
// ============================================================================
