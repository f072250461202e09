//! Lex-then-parse in one call.

use ra7ma_syntax::FrontendConfig;
use ra7ma_syntax::include::{IncludeResolver, lex_with_includes};
use ra7ma_syntax::lexer::Lexed;
use ra7ma_syntax::parser;
use ra7ma_syntax::symbols::SymbolTable;
use ra7ma_syntax::trace::ParseReport;

/// Everything one front-end run produces.
#[derive(Debug)]
pub struct Analysis {
    /// Tokens with includes spliced in, plus lexical diagnostics
    pub lexed: Lexed,
    /// Parse trace
    pub report: ParseReport,
    /// Declarations that survived the parse
    pub symbols: SymbolTable,
}

impl Analysis {
    /// Lexical and parse diagnostics together.
    pub fn error_count(&self) -> usize {
        self.lexed.diagnostics.len() + self.report.error_count()
    }

    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }
}

/// Lex `source` (expanding includes through `resolver`) and parse the result into a fresh symbol table.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn analyze(source: &str, resolver: &mut dyn IncludeResolver, config: &FrontendConfig) -> Analysis {
    let lexed = lex_with_includes(source, resolver, config);
    let mut symbols = SymbolTable::new();
    let report = parser::parse_with_config(&lexed.tokens, &mut symbols, config);
    let analysis = Analysis {
        lexed,
        report,
        symbols,
    };
    tracing::debug!(
        errors = analysis.error_count(),
        halted = analysis.report.halted,
        "analysis finished"
    );
    analysis
}
