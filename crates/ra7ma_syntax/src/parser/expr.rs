/// Expression parsing methods (precedence climbing).
///
/// This chunk implements expression parsing from `logical_or` down to `factor`.
///
/// ## Notes
/// - Precedence, loosest first: `||`, `&&`, one optional relational operator, `+ -`, `* /`, then factors.
/// - The lexer glues a sign to the digits after it, so `a -1` arrives as `a` followed by the literal `-1`;
///   `additive` reads that as a subtraction.
/// - `factor` is the only place that raises a [`ParseFault`].
/// - Parenthesized groups and call arguments count toward `max_nesting`; a run of `~` is consumed in a loop.
impl<'a, 's> Parser<'a, 's> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> PResult<ExprForm> {
        self.logical_or()
    }

    fn logical_or(&mut self) -> PResult<ExprForm> {
        let mut form = self.logical_and()?;
        while self.match_op(OperatorId::OrOr) {
            self.logical_and()?;
            form = ExprForm::Compound;
        }
        Ok(form)
    }

    fn logical_and(&mut self) -> PResult<ExprForm> {
        let mut form = self.relational()?;
        while self.match_op(OperatorId::AndAnd) {
            self.relational()?;
            form = ExprForm::Compound;
        }
        Ok(form)
    }

    /// Relational operators do not chain: `a < b < c` stops after `a < b`.
    fn relational(&mut self) -> PResult<ExprForm> {
        let form = self.additive()?;
        if self.peek().operator_id().is_some_and(operators::is_relational) {
            self.advance();
            self.additive()?;
            return Ok(ExprForm::Compound);
        }
        Ok(form)
    }

    fn additive(&mut self) -> PResult<ExprForm> {
        let mut form = self.term()?;
        loop {
            if self.match_op(OperatorId::Plus) || self.match_op(OperatorId::Minus) || self.at_signed_literal() {
                self.term()?;
                form = ExprForm::Compound;
            } else {
                break;
            }
        }
        Ok(form)
    }

    fn at_signed_literal(&self) -> bool {
        matches!(
            self.peek().kind.literal_kind(),
            Some(LiteralKind::SignedInteger | LiteralKind::SignedFloat)
        )
    }

    fn term(&mut self) -> PResult<ExprForm> {
        let mut form = self.factor()?;
        while self.match_op(OperatorId::Star) || self.match_op(OperatorId::Slash) {
            self.factor()?;
            form = ExprForm::Compound;
        }
        Ok(form)
    }

    /// `'(' expr ')' | '~' factor | literal | name | name '(' args? ')'`
    fn factor(&mut self) -> PResult<ExprForm> {
        let token = self.peek().clone();
        match token.kind {
            TokenKind::Punctuation(PunctuationId::LParen) => self.nested(ExprForm::Compound, |p| {
                p.advance();
                p.expression()?;
                p.close_paren()?;
                Ok(ExprForm::Compound)
            }),
            TokenKind::Operator(OperatorId::Not) => {
                while self.match_op(OperatorId::Not) {}
                self.factor()?;
                Ok(ExprForm::Compound)
            }
            TokenKind::Literal(kind) => {
                self.advance();
                Ok(ExprForm::Literal(kind))
            }
            TokenKind::Ident => {
                self.advance();
                if self.check_punct(PunctuationId::LParen) {
                    self.nested(ExprForm::Call, |p| p.call(&token))
                } else {
                    self.check_name(&token);
                    Ok(ExprForm::Name)
                }
            }
            // Already reported by the lexer; treated as an unknown operand.
            TokenKind::Invalid => {
                self.advance();
                Ok(ExprForm::Compound)
            }
            _ => Err(ParseFault::unexpected(&token)),
        }
    }

    /// `name '(' (expr (',' expr)*)? ')'`, checked against the function table.
    fn call(&mut self, callee: &Token) -> PResult<ExprForm> {
        let expected = self
            .symbols
            .get_function_signature(&callee.lexeme)
            .map(|signature| signature.parameter_types.len())
            .ok();
        if expected.is_none() {
            self.report(errors::function_not_declared(&callee.lexeme, callee.line, callee.span));
        }

        self.advance();
        let mut found = 0;
        if !self.check_punct(PunctuationId::RParen) {
            loop {
                self.expression()?;
                found += 1;
                if !self.match_punct(PunctuationId::Comma) {
                    break;
                }
            }
        }
        self.close_paren()?;

        if let Some(expected) = expected.filter(|&expected| expected != found) {
            self.report(errors::argument_count(&callee.lexeme, expected, found, callee.line, callee.span));
        }
        Ok(ExprForm::Call)
    }

    fn close_paren(&mut self) -> PResult<()> {
        if self.match_punct(PunctuationId::RParen) {
            return Ok(());
        }
        Err(ParseFault::UnmatchedParen {
            line: self.peek().line,
            span: self.peek().span,
        })
    }

    /// Report a bare name that is not a visible variable. Function names only count when called.
    fn check_name(&mut self, name: &Token) {
        if self.symbols.exists(&name.lexeme) {
            return;
        }
        let mut diagnostic = errors::not_declared(&name.lexeme, name.line, name.span);
        if self.symbols.function_exists(&name.lexeme) {
            diagnostic = diagnostic.with_hint(format!("'{0}' is a function; call it as {0}(...)", name.lexeme));
        }
        self.report(diagnostic);
    }
}
