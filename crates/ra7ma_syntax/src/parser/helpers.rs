/// Token-stream helpers, trace recording and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `peek_at`, `advance`)
/// - Matching / expecting operators, punctuation and identifiers
/// - Recording trace entries (`matched`, `report`)
/// - Error recovery (`synchronize`)
impl<'a, 's> Parser<'a, 's> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    fn peek_next(&self) -> &Token {
        self.peek_at(1)
    }

    /// Return the token `offset` places ahead; past the end this is an `Eof` token.
    fn peek_at(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).unwrap_or(&END_OF_INPUT)
    }

    /// Advance to the next token and return the token we just consumed.
    ///
    /// At the end of input the cursor stays on `Eof`, which is returned.
    fn advance(&mut self) -> &Token {
        let index = self.pos;
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.tokens.get(index).unwrap_or(&END_OF_INPUT)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().kind.is_operator(id)
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        if self.check_op(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the given punctuation, or report `Expected <what>` and carry on as if it were there.
    fn expect_punct(&mut self, id: PunctuationId, what: &str) -> bool {
        if self.match_punct(id) {
            return true;
        }
        let (line, span) = (self.peek().line, self.peek().span);
        self.report(errors::expected(what, line, span));
        false
    }

    /// Consume an identifier, or report `Expected <what>` without consuming anything.
    fn expect_identifier(&mut self, what: &str) -> Option<Token> {
        if matches!(self.peek().kind, TokenKind::Ident) {
            return Some(self.advance().clone());
        }
        let (line, span) = (self.peek().line, self.peek().span);
        self.report(errors::expected(what, line, span));
        None
    }

    /// Return `true` if the current token can begin an expression.
    fn is_at_expr_start(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Ident | TokenKind::Literal(_) | TokenKind::Invalid
        ) || self.check_punct(PunctuationId::LParen)
            || self.check_op(OperatorId::Not)
    }

    // ========================================================================
    // Trace
    // ========================================================================

    fn matched(&mut self, rule: Rule, line: usize) {
        self.trace.push(TraceEntry::Matched { rule, line });
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.trace.push(TraceEntry::Error(diagnostic));
    }

    /// Turn a failed declaration into its diagnostic.
    fn symbol_error(error: SymbolError, at: &Token) -> Diagnostic {
        match error {
            SymbolError::VariableRedeclared(name) => errors::already_declared(&name, at.line, at.span),
            other => errors::name_conflict(&other, at.line, at.span),
        }
    }

    // ========================================================================
    // Recovery
    // ========================================================================

    /// Parse one level deeper with `parse`.
    ///
    /// Past `max_nesting` the construct at the cursor is reported once, skipped with [`Self::skip_nested`], and
    /// `skipped` stands in for its result.
    fn nested<T>(&mut self, skipped: T, parse: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.nesting >= self.config.max_nesting {
            let (line, span) = (self.peek().line, self.peek().span);
            self.report(errors::nesting_too_deep(self.config.max_nesting, line, span));
            self.skip_nested();
            return Ok(skipped);
        }
        self.nesting += 1;
        let result = parse(self);
        self.nesting -= 1;
        result
    }

    /// Skip the construct at the cursor without recursing.
    ///
    /// A group opened by `(` or `{` ends at its matching close. Anything else ends after a `;` or a `{ ... }` at
    /// its own level. A close bracket belonging to an enclosing construct is never consumed.
    fn skip_nested(&mut self) {
        let group = self.check_punct(PunctuationId::LParen) || self.check_punct(PunctuationId::LBrace);
        let mut depth = 0usize;
        while !self.is_at_end() {
            match self.peek().kind {
                TokenKind::Punctuation(PunctuationId::LParen | PunctuationId::LBrace) => depth += 1,
                TokenKind::Punctuation(PunctuationId::RParen | PunctuationId::RBrace) => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                    if depth == 0 && (group || self.check_punct(PunctuationId::RBrace)) {
                        self.advance();
                        return;
                    }
                }
                TokenKind::Punctuation(PunctuationId::Semicolon) if depth == 0 => {
                    self.advance();
                    return;
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// Skip to the next statement boundary after a fault.
    ///
    /// Consumes at least one token, then stops after a `;` or before a token that can start a statement. Inside a
    /// block it also stops before `}` (and consumes nothing if already there) so the block can still close.
    fn synchronize(&mut self) {
        if self.block_depth > 0 && self.check_punct(PunctuationId::RBrace) {
            return;
        }
        if self.advance().kind.is_punctuation(PunctuationId::Semicolon) {
            return;
        }
        while !self.is_at_end() {
            if self.match_punct(PunctuationId::Semicolon) {
                return;
            }
            if self.peek().kind.starts_statement() || self.check_punct(PunctuationId::RBrace) {
                return;
            }
            self.advance();
        }
    }
}
