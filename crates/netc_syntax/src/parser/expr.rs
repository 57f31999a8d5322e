/// Condition and expression parsing.
///
/// `Condition` is flat: one relational or logical operator at most. `Expr` and `Term` are
/// left-associative loops; bitwise `| & ^` share the additive tier and shifts share the
/// multiplicative tier.
///
/// ## Notes
/// - These rules record faults in place and return; they never synchronize.
impl<'a> Parser<'a> {
    // ========================================================================
    // Conditions
    // ========================================================================

    // Condition → '!' Condition | '(' Condition ')' | Expr [ (RelOp | LogicalOp) Expr ]
    fn condition(&mut self) {
        self.enter_rule("condition");

        if self.match_op(OperatorId::Not) {
            self.nested(|p| p.condition());
            return;
        }

        if self.match_punct(PunctuationId::LParen) {
            self.nested(|p| p.condition());
            if !self.match_punct(PunctuationId::RParen) {
                self.error_here("Expected ')' after condition");
            }
            return;
        }

        self.expr();
        let kind = self.peek().kind;
        if kind.is_rel_op() || kind.is_logical_op() {
            self.advance();
            self.expr();
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    // Expr → Term (AddOp Term)*
    fn expr(&mut self) {
        self.term();
        while self.peek().kind.is_add_op() {
            self.advance();
            self.term();
        }
    }

    // Term → Factor (MulOp Factor)*
    fn term(&mut self) {
        self.factor();
        while self.peek().kind.is_mul_op() {
            self.advance();
            self.factor();
        }
    }

    // Factor → UnaryOp Factor | Literal | Identifier ['(' [ArgumentList] ')'] | '(' Expr ')'
    fn factor(&mut self) {
        let kind = self.peek().kind;

        if kind.is_unary_op() {
            self.advance();
            self.nested(|p| p.factor());
            return;
        }

        if kind.is_literal() {
            self.advance();
            return;
        }

        if kind == TokenKind::Ident {
            self.advance();
            if self.match_punct(PunctuationId::LParen) {
                self.enter_rule("function call");
                if !self.check_punct(PunctuationId::RParen) {
                    self.nested(|p| p.argument_list());
                }
                if !self.match_punct(PunctuationId::RParen) {
                    self.error_here("Expected ')' after arguments");
                }
            }
            return;
        }

        if self.match_punct(PunctuationId::LParen) {
            self.nested(|p| p.expr());
            if !self.match_punct(PunctuationId::RParen) {
                self.error_here("Expected ')' after expression");
            }
            return;
        }

        self.error_here("Expected expression");
    }

    // ArgumentList → Expr (',' Expr)*
    fn argument_list(&mut self) {
        self.expr();
        while self.match_punct(PunctuationId::Comma) {
            self.expr();
        }
    }
}
