//! String and number scanning for the NetC scanner.

use super::Lexer;
use super::tokens::TokenKind;
use crate::diagnostics::errors;

impl<'a> Lexer<'a> {
    /// Scan a string literal; the opening quote has been consumed.
    ///
    /// Strings may span lines and have no escape sequences. If the input ends before the closing quote the partial
    /// literal is dropped and an unterminated-string fault is reported at the opening quote.
    pub(super) fn scan_string(&mut self) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            self.advance();
        }

        if self.is_at_end() {
            let err = errors::unterminated_string(self.start_line, self.start_column, self.lexeme_span());
            tracing::trace!(line = err.line, column = err.column, "{}", err.message);
            self.errors.push(err);
            return;
        }

        self.advance(); // closing "
        self.add_token(TokenKind::StringLiteral);
    }

    /// Scan an integer or float literal; the first digit has been consumed.
    ///
    /// A `.` only starts a fractional part when a digit follows it. There is no exponent form and no sign.
    pub(super) fn scan_number(&mut self) {
        self.consume_digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume .
            self.consume_digits();
            self.add_token(TokenKind::FloatLiteral);
        } else {
            self.add_token(TokenKind::IntLiteral);
        }
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}
