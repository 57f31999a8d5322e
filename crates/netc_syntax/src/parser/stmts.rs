/// Statement parsing methods.
///
/// This chunk covers `StatementList`, the LL(1) statement dispatch and every statement and
/// definition form (`link`, declarations, assignments, `if`, `until`, `iterate`, `network`,
/// `init`, `feed`, `forward`, `yield`).
///
/// ## Notes
/// - Statement rules return `PResult<()>`; an `Err` is a statement-level fault and is turned
///   into a diagnostic plus `synchronize()` by `statement_list`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    // StatementList → Statement*   (stops at '}' or end of input)
    fn statement_list(&mut self) {
        while !self.is_at_end() && !self.check_punct(PunctuationId::RBrace) {
            if let Err(error) = self.statement() {
                self.report(error);
                self.synchronize();
            }
        }
    }

    fn statement(&mut self) -> PResult<()> {
        match self.peek().kind {
            TokenKind::Comment => {
                self.advance();
                Ok(())
            }
            TokenKind::Punctuation(PunctuationId::Semicolon) => {
                self.advance();
                Ok(())
            }
            TokenKind::Ident => self.assignment(),
            TokenKind::Keyword(id) => match id {
                KeywordId::Link => self.link_stmt(),
                KeywordId::Text | KeywordId::Dnum | KeywordId::Cnum | KeywordId::Flag => self.declaration(),
                KeywordId::If => self.if_stmt(),
                KeywordId::Until => self.until_stmt(),
                KeywordId::Iterate => self.iterate_stmt(),
                KeywordId::Network => self.network_stmt(),
                KeywordId::Init => self.init_stmt(),
                KeywordId::Feed => self.feed_stmt(),
                KeywordId::Forward => self.forward_stmt(),
                KeywordId::Yield => self.return_stmt(),
                KeywordId::Else | KeywordId::True | KeywordId::False => Err(self.unexpected_in_statement()),
            },
            TokenKind::Punctuation(_)
            | TokenKind::Operator(_)
            | TokenKind::IntLiteral
            | TokenKind::FloatLiteral
            | TokenKind::StringLiteral
            | TokenKind::BoolLiteral
            | TokenKind::Eof
            | TokenKind::Unknown => Err(self.unexpected_in_statement()),
        }
    }

    fn unexpected_in_statement(&self) -> CompileError {
        CompileError::syntax("Unexpected token in statement", self.peek())
    }

    // '{' StatementList '}'
    fn block(&mut self, open_msg: &str, close_msg: &str) -> PResult<()> {
        self.expect_punct(PunctuationId::LBrace, open_msg)?;
        self.nested(|p| p.statement_list());
        self.expect_punct(PunctuationId::RBrace, close_msg)
    }

    // LinkStmt → 'link' StringLiteral ';'
    fn link_stmt(&mut self) -> PResult<()> {
        self.enter_rule("link statement");
        self.expect_keyword(KeywordId::Link, "Expected 'link'")?;
        self.expect(TokenKind::StringLiteral, "Expected string literal after 'link'")?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after link statement")
    }

    // Declaration → DataType Identifier [ '=' Expr ] ';'
    fn declaration(&mut self) -> PResult<()> {
        self.enter_rule("declaration");
        self.data_type("Expected data type")?;
        self.expect_ident("Expected identifier in declaration")?;
        if self.match_op(OperatorId::Assign) {
            self.expr();
        }
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after declaration")
    }

    // Assignment → Identifier '=' Expr ';'
    fn assignment(&mut self) -> PResult<()> {
        self.enter_rule("assignment");
        self.expect_ident("Expected identifier in assignment")?;
        self.expect(TokenKind::Operator(OperatorId::Assign), "Expected '=' in assignment")?;
        self.expr();
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after assignment")
    }

    // IfStmt → 'if' '(' Condition ')' '{' StatementList '}' [ 'else' '{' StatementList '}' ]
    fn if_stmt(&mut self) -> PResult<()> {
        self.enter_rule("if statement");
        self.expect_keyword(KeywordId::If, "Expected 'if'")?;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'if'")?;
        self.condition();
        self.expect_punct(PunctuationId::RParen, "Expected ')' after condition")?;
        self.block("Expected '{' after if condition", "Expected '}' after if body")?;

        if self.match_keyword(KeywordId::Else) {
            self.block("Expected '{' after 'else'", "Expected '}' after else body")?;
        }
        Ok(())
    }

    // UntilStmt → 'until' '(' Condition ')' '{' StatementList '}'
    fn until_stmt(&mut self) -> PResult<()> {
        self.enter_rule("until loop");
        self.expect_keyword(KeywordId::Until, "Expected 'until'")?;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'until'")?;
        self.condition();
        self.expect_punct(PunctuationId::RParen, "Expected ')' after condition")?;
        self.block("Expected '{' after until condition", "Expected '}' after until body")
    }

    // IterateStmt → 'iterate' '(' [DataType Identifier ['=' Expr]] ';' Condition ';'
    //               [Identifier '=' Expr] ')' '{' StatementList '}'
    fn iterate_stmt(&mut self) -> PResult<()> {
        self.enter_rule("iterate loop");
        self.expect_keyword(KeywordId::Iterate, "Expected 'iterate'")?;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'iterate'")?;

        if self.check_data_type() {
            self.advance();
            self.expect_ident("Expected identifier in iterate initialization")?;
            if self.match_op(OperatorId::Assign) {
                self.expr();
            }
        }
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after iterate initialization")?;

        self.condition();
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after iterate condition")?;

        if self.match_token(TokenKind::Ident) {
            self.expect(TokenKind::Operator(OperatorId::Assign), "Expected '=' in iterate update")?;
            self.expr();
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after iterate clauses")?;
        self.block("Expected '{' after iterate header", "Expected '}' after iterate body")
    }

    // NetworkStmt → 'network' Identifier '(' [ParameterList] ')' '{' StatementList '}'
    fn network_stmt(&mut self) -> PResult<()> {
        self.enter_rule("network function");
        self.expect_keyword(KeywordId::Network, "Expected 'network'")?;
        self.expect_ident("Expected function name after 'network'")?;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after function name")?;
        if !self.check_punct(PunctuationId::RParen) {
            self.parameter_list()?;
        }
        self.expect_punct(PunctuationId::RParen, "Expected ')' after parameters")?;
        self.block("Expected '{' after function header", "Expected '}' after function body")
    }

    // InitStmt → 'init' '(' ')' '{' StatementList '}'
    fn init_stmt(&mut self) -> PResult<()> {
        self.enter_rule("init function");
        self.expect_keyword(KeywordId::Init, "Expected 'init'")?;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'init'")?;
        self.expect_punct(PunctuationId::RParen, "Expected ')' after 'init'")?;
        self.block("Expected '{' after init header", "Expected '}' after init body")
    }

    // ParameterList → DataType Identifier (',' DataType Identifier)*
    fn parameter_list(&mut self) -> PResult<()> {
        loop {
            self.data_type("Expected data type in parameter list")?;
            self.expect_ident("Expected parameter name")?;
            if !self.match_punct(PunctuationId::Comma) {
                return Ok(());
            }
        }
    }

    // ReturnStmt → 'yield' Expr ';'
    fn return_stmt(&mut self) -> PResult<()> {
        self.enter_rule("return statement");
        self.expect_keyword(KeywordId::Yield, "Expected 'yield'")?;
        self.expr();
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after return statement")
    }

    // FeedStmt → 'feed' Identifier ';'
    fn feed_stmt(&mut self) -> PResult<()> {
        self.enter_rule("feed statement");
        self.expect_keyword(KeywordId::Feed, "Expected 'feed'")?;
        self.expect_ident("Expected identifier after 'feed'")?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after feed statement")
    }

    // ForwardStmt → 'forward' '(' Expr ')' ';'
    fn forward_stmt(&mut self) -> PResult<()> {
        self.enter_rule("forward statement");
        self.expect_keyword(KeywordId::Forward, "Expected 'forward'")?;
        self.expect_punct(PunctuationId::LParen, "Expected '(' after 'forward'")?;
        self.expr();
        self.expect_punct(PunctuationId::RParen, "Expected ')' after expression")?;
        self.expect_punct(PunctuationId::Semicolon, "Expected ';' after forward statement")
    }

    /// Consume one of `text`, `dnum`, `cnum`, `flag`.
    fn data_type(&mut self, msg: &str) -> PResult<()> {
        if self.check_data_type() {
            self.advance();
            Ok(())
        } else {
            Err(CompileError::syntax(msg, self.peek()))
        }
    }

    fn check_data_type(&self) -> bool {
        self.peek().kind.is_data_type()
    }
}
