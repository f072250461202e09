/// Statement parsing methods.
///
/// This chunk dispatches on the current token and parses statement forms (selection, iteration, jumps,
/// assignments, blocks, comments, expression statements).
///
/// ## Notes
/// - Dispatch needs at most two tokens of lookahead: `type name (` starts a function definition, any other
///   `type ...` a declaration.
/// - `IfTrue` and `Otherwise` share one token kind; the spelling decides the role.
impl<'a, 's> Parser<'a, 's> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// One statement, counted against the nesting limit.
    fn statement(&mut self) -> PResult<()> {
        self.nested((), Self::dispatch_statement)
    }

    fn dispatch_statement(&mut self) -> PResult<()> {
        let kind = self.peek().kind;
        match kind {
            kind if kind.is_comment() => {
                self.comment();
                Ok(())
            }
            TokenKind::Keyword(id) => self.keyword_statement(id),
            TokenKind::Punctuation(PunctuationId::LBrace) => {
                self.block();
                Ok(())
            }
            TokenKind::Punctuation(PunctuationId::Semicolon) => {
                let line = self.advance().line;
                self.matched(Rule::EmptyStatement, line);
                Ok(())
            }
            TokenKind::Punctuation(PunctuationId::RBrace) => {
                self.stray_close();
                Ok(())
            }
            TokenKind::Ident if self.peek_next().kind.is_operator(OperatorId::Eq) => self.assignment(),
            // Already reported by the lexer; the caller's progress guard skips it.
            TokenKind::Invalid => Ok(()),
            TokenKind::IncludeDirective => {
                self.unexpanded_include();
                Ok(())
            }
            TokenKind::Eof => {
                let (line, span) = (self.peek().line, self.peek().span);
                self.report(errors::expected("statement", line, span));
                Ok(())
            }
            _ => self.expression_statement(),
        }
    }

    fn keyword_statement(&mut self, id: KeywordId) -> PResult<()> {
        match id {
            KeywordId::Integer
            | KeywordId::SignedInteger
            | KeywordId::Character
            | KeywordId::Text
            | KeywordId::Float
            | KeywordId::SignedFloat
            | KeywordId::Void => {
                let next = &self.peek_next().kind;
                let is_function = next.is_punctuation(PunctuationId::LParen)
                    || (matches!(next, TokenKind::Ident) && self.peek_at(2).kind.is_punctuation(PunctuationId::LParen));
                if is_function {
                    self.function_definition()
                } else {
                    self.declaration()
                }
            }
            KeywordId::Condition => self.selection(),
            KeywordId::Loop => self.iteration(),
            KeywordId::Return | KeywordId::Break => self.jump(),
            KeywordId::Struct => self.struct_declaration(),
            KeywordId::Include => {
                self.unexpanded_include();
                Ok(())
            }
        }
    }

    /// `'{' statement* '}'` in a fresh block scope.
    fn block(&mut self) {
        let line = self.advance().line;
        self.symbols.enter_scope(ScopeKind::Block);
        self.block_body();
        self.symbols.exit_scope();
        self.matched(Rule::Block, line);
    }

    /// Statements up to and including the closing `}`; the opening `{` is already consumed.
    fn block_body(&mut self) {
        self.block_depth += 1;
        while !self.is_at_end() && !self.check_punct(PunctuationId::RBrace) {
            self.recovering_statement();
        }
        self.block_depth -= 1;
        self.expect_punct(PunctuationId::RBrace, "'}'");
    }

    /// `IfTrue '(' expr ')' statement (Otherwise statement)?`
    ///
    /// A fault in the first branch is recovered here so that its `Otherwise` still pairs with this `IfTrue`.
    fn selection(&mut self) -> PResult<()> {
        let keyword = self.advance().clone();
        if keyword.condition_role() == Some(ConditionRole::Otherwise) {
            self.report(errors::otherwise_without_if(keyword.line, keyword.span));
            return self.statement();
        }

        self.expect_punct(PunctuationId::LParen, "'('");
        self.expression()?;
        self.expect_punct(PunctuationId::RParen, "')'");
        if let Err(fault) = self.statement() {
            self.report(fault.into_diagnostic());
            if self.peek().condition_role() != Some(ConditionRole::Otherwise) {
                self.synchronize();
            }
        }

        if self.peek().condition_role() == Some(ConditionRole::Otherwise) {
            self.advance();
            self.statement()?;
            self.matched(Rule::IfElse, keyword.line);
        } else {
            self.matched(Rule::If, keyword.line);
        }
        Ok(())
    }

    /// `RepeatWhen '(' expr ')' statement`
    fn iteration(&mut self) -> PResult<()> {
        let line = self.advance().line;
        self.expect_punct(PunctuationId::LParen, "'('");
        self.expression()?;
        self.expect_punct(PunctuationId::RParen, "')'");

        self.loop_depth += 1;
        let body = self.statement();
        self.loop_depth -= 1;
        body?;

        self.matched(Rule::Loop, line);
        Ok(())
    }

    /// `Turnback expr? ';'` or `OutLoop ';'`
    fn jump(&mut self) -> PResult<()> {
        let keyword = self.advance().clone();
        if keyword.kind.is_keyword(KeywordId::Break) {
            if self.loop_depth == 0 {
                self.report(errors::break_outside_loop(keyword.line, keyword.span));
            }
            self.expect_punct(PunctuationId::Semicolon, "';'");
            self.matched(Rule::Break, keyword.line);
        } else {
            if !self.check_punct(PunctuationId::Semicolon) {
                self.expression()?;
            }
            self.expect_punct(PunctuationId::Semicolon, "';'");
            self.matched(Rule::Return, keyword.line);
        }
        Ok(())
    }

    /// `name '=' expr ';'`
    fn assignment(&mut self) -> PResult<()> {
        let target = self.advance().clone();
        self.advance();

        let ty = match self.symbols.get_variable_type(&target.lexeme) {
            Ok(ty) => ty,
            Err(_) => {
                self.report(errors::not_declared(&target.lexeme, target.line, target.span));
                PrimitiveType::Unknown
            }
        };
        let value = self.expression()?;
        self.check_literal(&target, ty, Some(value));

        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.matched(Rule::Assignment, target.line);
        Ok(())
    }

    fn expression_statement(&mut self) -> PResult<()> {
        let line = self.peek().line;
        self.expression()?;
        self.expect_punct(PunctuationId::Semicolon, "';'");
        self.matched(Rule::ExpressionStatement, line);
        Ok(())
    }

    /// A `/^` comment with its text is one match; a `/@ ... @/` comment matches its start, each text line and its
    /// end separately. Stray comment text or end markers are skipped.
    fn comment(&mut self) {
        let opener = self.advance().clone();
        match opener.kind {
            TokenKind::SingleComment => {
                if matches!(self.peek().kind, TokenKind::CommentContent) {
                    self.advance();
                }
                self.matched(Rule::Comment, opener.line);
            }
            TokenKind::MultiCommentStart => {
                self.matched(Rule::Comment, opener.line);
                while matches!(self.peek().kind, TokenKind::CommentContent) {
                    let line = self.advance().line;
                    self.matched(Rule::CommentPart, line);
                }
                if matches!(self.peek().kind, TokenKind::MultiCommentEnd) {
                    let line = self.advance().line;
                    self.matched(Rule::CommentEnd, line);
                }
            }
            _ => {}
        }
    }

    /// A `}` where a statement was expected. Inside a block it is left for the block to close.
    fn stray_close(&mut self) {
        let (line, span) = (self.peek().line, self.peek().span);
        if self.block_depth > 0 {
            self.report(errors::expected("statement", line, span));
        } else {
            self.report(errors::unexpected_close(line, span));
            self.advance();
        }
    }

    fn unexpanded_include(&mut self) {
        let token = self.advance().clone();
        self.report(errors::unexpanded_include(&token.lexeme, token.line, token.span));
    }
}
