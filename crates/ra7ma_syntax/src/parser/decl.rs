/// Declaration parsing methods.
///
/// This chunk parses function definitions, variable declarations (with optional initializers) and `Loli` struct
/// declarations, and performs the symbol-table side of each.
impl<'a, 's> Parser<'a, 's> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `type name '(' params? ')' block`
    ///
    /// The signature goes into the global function table before the body is parsed, so a function may call
    /// itself. Parameters are declared in the function's own scope, which the body block reuses.
    fn function_definition(&mut self) -> PResult<()> {
        let type_token = self.advance().clone();
        let return_type = type_token.kind.type_keyword().unwrap_or(PrimitiveType::Unknown);
        let name = self.expect_identifier("function name");
        self.expect_punct(PunctuationId::LParen, "'('");
        let params = self.parameters();
        self.expect_punct(PunctuationId::RParen, "')'");

        let scope_name = name.as_ref().map(|n| n.lexeme.clone()).unwrap_or_default();
        if let Some(name) = &name {
            let parameter_types = params.iter().map(|(_, ty)| *ty).collect();
            if let Err(e) = self.symbols.declare_function(&name.lexeme, return_type, parameter_types) {
                self.report(Self::symbol_error(e, name));
            }
        }

        self.symbols.enter_scope(ScopeKind::Function(scope_name));
        for (param, ty) in &params {
            self.declare_variable(param, *ty);
        }
        self.matched(Rule::FunctionDeclaration, type_token.line);

        let outer_loops = std::mem::take(&mut self.loop_depth);
        if self.expect_punct(PunctuationId::LBrace, "'{'") {
            self.block_body();
        }
        self.loop_depth = outer_loops;
        self.symbols.exit_scope();
        Ok(())
    }

    /// `(type name (',' type name)*)?`, stopping before `)`.
    fn parameters(&mut self) -> Vec<(Token, PrimitiveType)> {
        let mut params = Vec::new();
        if self.check_punct(PunctuationId::RParen) {
            return params;
        }
        loop {
            let ty = match self.peek().kind.type_keyword() {
                Some(ty) => {
                    self.advance();
                    ty
                }
                None => {
                    let (line, span) = (self.peek().line, self.peek().span);
                    self.report(errors::expected("parameter type", line, span));
                    PrimitiveType::Unknown
                }
            };
            if let Some(name) = self.expect_identifier("parameter name") {
                params.push((name, ty));
            }
            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }
        params
    }

    /// `type name ('=' expr)? (',' name ('=' expr)?)* ';'`
    ///
    /// Each name is declared once its initializer has been parsed, and traced only if the declaration succeeded.
    fn declaration(&mut self) -> PResult<()> {
        let type_token = self.advance().clone();
        let ty = type_token.kind.type_keyword().unwrap_or(PrimitiveType::Unknown);

        loop {
            let Some(name) = self.expect_identifier("variable name") else {
                break;
            };

            let initializer = if self.match_op(OperatorId::Eq) {
                Some(self.expression()?)
            } else if self.is_at_expr_start() {
                let (line, span) = (self.peek().line, self.peek().span);
                self.report(errors::expected("'=' after variable name", line, span));
                Some(self.expression()?)
            } else {
                None
            };

            if self.declare_variable(&name, ty) {
                self.matched(Rule::Declaration, name.line);
                self.check_literal(&name, ty, initializer);
            }

            if !self.match_punct(PunctuationId::Comma) {
                break;
            }
        }

        self.expect_punct(PunctuationId::Semicolon, "';'");
        Ok(())
    }

    /// Declare `name` in the current scope, reporting why not if it fails.
    fn declare_variable(&mut self, name: &Token, ty: PrimitiveType) -> bool {
        if ty == PrimitiveType::Void {
            self.report(errors::void_variable(&name.lexeme, name.line, name.span));
            return false;
        }
        match self.symbols.declare_variable(&name.lexeme, ty) {
            Ok(_) => true,
            Err(e) => {
                self.report(Self::symbol_error(e, name));
                false
            }
        }
    }

    /// Report a single-literal right-hand side whose kind does not fit the target's type.
    ///
    /// Anything other than a lone literal is not checked.
    fn check_literal(&mut self, target: &Token, ty: PrimitiveType, value: Option<ExprForm>) {
        if !self.config.check_literal_types {
            return;
        }
        let Some(ExprForm::Literal(literal)) = value else {
            return;
        };
        if !types::accepts_literal(ty, literal) {
            self.report(errors::type_mismatch(&target.lexeme, ty, literal, target.line, target.span));
        }
    }

    /// `Loli name '{' (type name (',' name)* ';')* '}' ';'?`
    ///
    /// Recognized and traced only; neither the struct nor its members enter the symbol table.
    fn struct_declaration(&mut self) -> PResult<()> {
        let line = self.advance().line;
        self.expect_identifier("struct name");
        if !self.expect_punct(PunctuationId::LBrace, "'{'") {
            return Ok(());
        }

        while !self.is_at_end() && !self.check_punct(PunctuationId::RBrace) {
            if self.peek().kind.type_keyword().is_some() {
                self.advance();
                while self.expect_identifier("member name").is_some() && self.match_punct(PunctuationId::Comma) {}
                self.expect_punct(PunctuationId::Semicolon, "';'");
            } else if self.peek().kind.is_comment() {
                self.comment();
            } else {
                let (line, span) = (self.peek().line, self.peek().span);
                self.report(errors::expected("member declaration", line, span));
                self.advance();
            }
        }

        self.expect_punct(PunctuationId::RBrace, "'}'");
        self.match_punct(PunctuationId::Semicolon);
        self.matched(Rule::StructDeclaration, line);
        Ok(())
    }
}
