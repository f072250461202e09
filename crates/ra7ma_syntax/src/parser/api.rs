/// Parse a token stream with the default [`FrontendConfig`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `ra7ma_syntax::lexer` or `ra7ma_syntax::include`.
/// - `symbols`: Receives every declaration; inspect it afterwards for the surviving global names.
pub fn parse(tokens: &[Token], symbols: &mut SymbolTable) -> ParseReport {
    parse_with_config(tokens, symbols, &FrontendConfig::default())
}

/// Parse a token stream with an explicit configuration.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_with_config(tokens: &[Token], symbols: &mut SymbolTable, config: &FrontendConfig) -> ParseReport {
    let report = Parser::new(tokens, symbols, config.clone()).parse();
    tracing::debug!(
        iterations = report.iterations,
        errors = report.error_count(),
        halted = report.halted,
        "parsed token stream"
    );
    report
}
