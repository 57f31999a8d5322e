/// Token-stream helpers, fault reporting and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting keywords, operators, punctuation and plain kinds
/// - Fault reporting (`report`, `error_here`)
/// - Error recovery (`synchronize`) and the nesting guard (`nested`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn token_at(&self, index: usize) -> &'a Token {
        self.tokens.get(index).unwrap_or(&EOF_SENTINEL)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        self.token_at(self.pos)
    }

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consume the current token and return it. At end of input nothing moves and the
    /// end-of-input token is returned.
    fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Return `true` if the current token has exactly this kind. Always `false` at end of input.
    fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.check(TokenKind::Punctuation(id))
    }

    /// If the current token matches `kind`, consume it and return `true`.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        self.match_token(TokenKind::Punctuation(id))
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        self.match_token(TokenKind::Keyword(id))
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        self.match_token(TokenKind::Operator(id))
    }

    /// Consume a token of `kind` or fail with `msg`, positioned at the current token.
    fn expect(&mut self, kind: TokenKind, msg: &str) -> PResult<()> {
        if self.match_token(kind) {
            Ok(())
        } else {
            Err(CompileError::syntax(msg, self.peek()))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> PResult<()> {
        self.expect(TokenKind::Punctuation(id), msg)
    }

    fn expect_keyword(&mut self, id: KeywordId, msg: &str) -> PResult<()> {
        self.expect(TokenKind::Keyword(id), msg)
    }

    fn expect_ident(&mut self, msg: &str) -> PResult<()> {
        self.expect(TokenKind::Ident, msg)
    }

    // ========================================================================
    // Fault reporting
    // ========================================================================

    /// Record a fault and set the sticky failure flag.
    fn report(&mut self, error: CompileError) {
        self.failed = true;
        if self.abandoned {
            return;
        }
        tracing::trace!(line = error.line, column = error.column, "{}", error.message);
        self.errors.push(error);
    }

    /// Record a fault positioned at the current token.
    fn error_here(&mut self, msg: &str) {
        let error = CompileError::syntax(msg, self.peek());
        self.report(error);
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    /// Discard tokens until a statement boundary.
    ///
    /// Always consumes at least one token (unless already at end of input), then stops right
    /// after a `;` or in front of any token that can start a statement.
    fn synchronize(&mut self) {
        let mut consumed = self.advance().kind;
        while !self.is_at_end() {
            if consumed.is_punctuation(PunctuationId::Semicolon) {
                return;
            }
            if self.peek().kind.can_start_statement() {
                return;
            }
            consumed = self.advance().kind;
        }
    }

    /// Run `rule` one nesting level deeper.
    ///
    /// Past the limit, a single fault is recorded, the cursor jumps to end of input and the
    /// rest of the pass stays silent.
    fn nested(&mut self, rule: impl FnOnce(&mut Self)) {
        if self.depth >= self.max_depth {
            self.abandon();
            return;
        }
        self.depth += 1;
        rule(self);
        self.depth -= 1;
    }

    fn abandon(&mut self) {
        if self.abandoned {
            return;
        }
        let error = errors::nesting_too_deep(self.max_depth, self.peek());
        self.report(error);
        self.abandoned = true;
        while !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Trace which rule is about to run and where.
    fn enter_rule(&self, rule: &'static str) {
        let token = self.peek();
        tracing::trace!(rule, line = token.line, column = token.column, "parsing");
    }
}
