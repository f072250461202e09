/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its top-level loop, and the small internal types shared across the
/// other parser chunks.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Stand-in returned by `peek` when a token slice has no trailing `Eof`.
static END_OF_INPUT: Token = Token {
    kind: TokenKind::Eof,
    lexeme: String::new(),
    line: 0,
    span: Span { start: 0, end: 0 },
};

/// A recoverable failure deep inside expression parsing.
///
/// Unlike a [`Diagnostic`], a fault unwinds: it is returned up to the nearest statement-sequence loop (program or
/// block), which records it and calls `synchronize()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
enum ParseFault {
    #[error("Expected ')'")]
    UnmatchedParen { line: usize, span: Span },
    #[error("Expected expression factor")]
    UnexpectedToken { found: String, line: usize, span: Span },
}

impl ParseFault {
    fn unexpected(token: &Token) -> Self {
        let found = match token.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", token.lexeme),
        };
        ParseFault::UnexpectedToken {
            found,
            line: token.line,
            span: token.span,
        }
    }

    fn into_diagnostic(self) -> Diagnostic {
        let message = self.to_string();
        match self {
            ParseFault::UnmatchedParen { line, span } => Diagnostic::syntax(message, line, span),
            ParseFault::UnexpectedToken { found, line, span } => {
                Diagnostic::syntax(message, line, span).with_hint(format!("found {found}"))
            }
        }
    }
}

type PResult<T> = Result<T, ParseFault>;

/// What an expression turned out to be, as far as the literal/type check cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExprForm {
    /// A single literal token, e.g. `+5` or `'c'`.
    Literal(LiteralKind),
    Name,
    Call,
    Compound,
}

/// Parser state.
///
/// ## Notes
/// - Single pass over a borrowed token slice; the cursor only moves forward.
/// - The symbol table is borrowed mutably for the whole run so the caller can inspect it afterwards.
pub struct Parser<'a, 's> {
    tokens: &'a [Token],
    pos: usize,
    symbols: &'s mut SymbolTable,
    config: FrontendConfig,
    trace: Vec<TraceEntry>,
    /// Loops enclosing the cursor within the current function.
    loop_depth: usize,
    /// Blocks enclosing the cursor; `synchronize` never consumes a `}` when this is non-zero.
    block_depth: usize,
    /// Statements and parenthesized groups currently being parsed, bounded by `max_nesting`.
    nesting: usize,
    iterations: usize,
}

impl<'a, 's> Parser<'a, 's> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `ra7ma_syntax::lexer` or `ra7ma_syntax::include`.
    /// - `symbols`: Table that receives every declaration.
    pub fn new(tokens: &'a [Token], symbols: &'s mut SymbolTable, config: FrontendConfig) -> Self {
        Self {
            tokens,
            pos: 0,
            symbols,
            config,
            trace: Vec::new(),
            loop_depth: 0,
            block_depth: 0,
            nesting: 0,
            iterations: 0,
        }
    }

    /// Parse the entire token stream.
    ///
    /// Every top-level statement is one iteration. A fault is recorded and followed by `synchronize()`; so is a
    /// statement that consumed nothing. Past `iteration_factor * token_count` iterations the parser records a
    /// single "stuck" diagnostic and stops.
    pub fn parse(mut self) -> ParseReport {
        let limit = self.config.iteration_limit(self.tokens.len());
        let mut halted = false;

        while !self.is_at_end() {
            if self.iterations >= limit {
                let (line, span) = (self.peek().line, self.peek().span);
                tracing::warn!(iterations = self.iterations, line, "parser made no progress, halting");
                self.report(errors::parser_stuck(self.iterations, line, span));
                halted = true;
                break;
            }
            self.iterations += 1;
            self.recovering_statement();
        }

        ParseReport {
            trace: self.trace,
            iterations: self.iterations,
            halted,
        }
    }

    /// One statement of a statement sequence, with fault recovery and the progress guard.
    fn recovering_statement(&mut self) {
        let start = self.pos;
        match self.statement() {
            Err(fault) => {
                self.report(fault.into_diagnostic());
                self.synchronize();
            }
            Ok(()) if self.pos == start => self.synchronize(),
            Ok(()) => {}
        }
    }
}
