//! Text rendering for front-end results
//!
//! Plain renderings are line oriented and stable, for terminals and for tests. [`pretty`] hands diagnostics to
//! `miette`'s graphical reporter with the source attached.

use std::fmt::{self, Write};

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};
use ra7ma_core::lang::{comments, keywords, operators, punctuation};
use ra7ma_syntax::Diagnostic;
use ra7ma_syntax::lexer::{Token, TokenKind};
use ra7ma_syntax::symbols::SymbolTable;
use ra7ma_syntax::trace::{ParseReport, TraceEntry};

/// One `Line: N Token Text: X Token Type: T` row per token, the end-of-file marker excluded.
pub fn scanner_listing(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens.iter().filter(|t| t.kind != TokenKind::Eof) {
        let _ = writeln!(out, "{token}");
    }
    out
}

/// A diagnostic outside the parse trace (lexical problems, failed includes).
pub fn diagnostic_line(diagnostic: &Diagnostic) -> String {
    format!(
        "Line : {} {}: {}",
        diagnostic.line, diagnostic.severity, diagnostic.message
    )
}

/// The parse trace with its closing total; with `errors` off, only the matched rules and the total.
pub fn trace(report: &ParseReport, errors: bool) -> String {
    if errors {
        return format!("{report}\n");
    }
    let mut out = String::new();
    for entry in report.trace.iter().filter(|e| matches!(e, TraceEntry::Matched { .. })) {
        let _ = writeln!(out, "{entry}");
    }
    let _ = writeln!(out, "{}", report.summary());
    out
}

/// Global variables in declaration order, then functions by name.
///
/// ```text
/// Name: x, Kind: variable, Type: Integer
/// Name: add, Kind: function, Type: Integer, Parameters: (Integer, Integer)
/// ```
pub fn symbol_dump(symbols: &SymbolTable) -> String {
    let mut out = String::new();
    for variable in symbols.globals() {
        let _ = writeln!(out, "Name: {}, Kind: variable, Type: {}", variable.name, variable.ty);
    }
    for (name, signature) in symbols.functions() {
        let params: Vec<_> = signature.parameter_types.iter().map(|ty| ty.as_str()).collect();
        let _ = writeln!(
            out,
            "Name: {name}, Kind: function, Type: {}, Parameters: ({})",
            signature.return_type,
            params.join(", ")
        );
    }
    out
}

/// Render diagnostics against `source` with `miette`'s graphical reporter (no colour).
pub fn pretty<'d>(
    name: &str,
    source: &str,
    diagnostics: impl IntoIterator<Item = &'d Diagnostic>,
) -> Result<String, fmt::Error> {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    for diagnostic in diagnostics {
        let report = Report::new(diagnostic.clone()).with_source_code(NamedSource::new(name, source.to_string()));
        handler.render_report(&mut out, report.as_ref())?;
    }
    Ok(out)
}

/// Markdown tables of the language vocabulary, straight from the `ra7ma_core` registries.
pub fn vocabulary() -> String {
    let mut out = String::from("# Ra7ma vocabulary\n\n## Keywords\n\n");
    out.push_str("| Id | Canonical | Aliases | Category | Description |\n");
    out.push_str("|---|---|---|---|---|\n");
    for k in keywords::KEYWORDS {
        let aliases = k
            .aliases
            .iter()
            .map(|a| format!("`{a}`"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "| {:?} | `{}` | {aliases} | {:?} | {} |",
            k.id, k.canonical, k.category, k.description
        );
    }

    out.push_str("\n## Operators\n\n");
    out.push_str("| Id | Spelling | Category | Precedence | Fixity |\n");
    out.push_str("|---|---|---|---|---|\n");
    for op in operators::OPERATORS {
        let _ = writeln!(
            out,
            "| {:?} | `{}` | {:?} | {} | {:?} |",
            op.id, op.spelling, op.category, op.precedence, op.fixity
        );
    }

    out.push_str("\n## Punctuation\n\n");
    out.push_str("| Id | Spelling | Category |\n");
    out.push_str("|---|---|---|\n");
    for p in punctuation::PUNCTUATION {
        let _ = writeln!(out, "| {:?} | `{}` | {:?} |", p.id, p.spelling, p.category);
    }

    out.push_str("\n## Comments\n\n");
    let _ = writeln!(out, "- `{}` starts a comment that runs to the end of the line", comments::SINGLE_LINE_START);
    let _ = writeln!(
        out,
        "- `{}` ... `{}` brackets a comment that may span lines",
        comments::MULTI_LINE_START,
        comments::MULTI_LINE_END
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::pipeline::analyze;
    use ra7ma_syntax::FrontendConfig;
    use ra7ma_syntax::include::NoIncludes;
    use ra7ma_syntax::lexer::lex;

    #[test]
    fn listing_skips_end_of_file() {
        let lexed = lex("Imw x;");
        insta::assert_snapshot!(scanner_listing(&lexed.tokens), @r"
        Line: 1 Token Text: Imw Token Type: Integer
        Line: 1 Token Text: x Token Type: Identifier
        Line: 1 Token Text: ; Token Type: Semicolon
        ");
    }

    #[test]
    fn lexical_diagnostic_line() {
        let lexed = lex("Imw 3x;");
        assert_eq!(
            diagnostic_line(&lexed.diagnostics[0]),
            format!("Line : 1 lexical error: {}", lexed.diagnostics[0].message)
        );
    }

    #[test]
    fn trace_without_errors_keeps_the_total() {
        let analysis = analyze("Imw x = ;\nImw y;\n", &mut NoIncludes, &FrontendConfig::default());
        let text = trace(&analysis.report, false);
        assert!(!text.contains("Not Matched"));
        assert!(text.contains("Rule used: Declaration"));
        assert!(text.ends_with("Total NO of errors: 1\n"));
    }

    #[test]
    fn symbols_are_dumped_globals_first() {
        let source = "Imw add(Imw a, Imw b) { Turnback a + b; }\nIMwf ratio;\n";
        let analysis = analyze(source, &mut NoIncludes, &FrontendConfig::default());
        insta::assert_snapshot!(symbol_dump(&analysis.symbols), @r"
        Name: ratio, Kind: variable, Type: Float
        Name: add, Kind: function, Type: Integer, Parameters: (Integer, Integer)
        ");
    }

    #[test]
    fn pretty_output_names_the_source() {
        let source = "Imw x = y;\n";
        let analysis = analyze(source, &mut NoIncludes, &FrontendConfig::default());
        let text = pretty("demo.r7", source, analysis.report.diagnostics()).unwrap();
        assert!(text.contains("demo.r7"));
        assert!(text.contains("Variable 'y' not declared before use"));
    }

    #[test]
    fn vocabulary_lists_every_registry_entry() {
        let text = vocabulary();
        assert!(text.contains("| Condition | `IfTrue` | `Otherwise` | Control |"));
        assert!(text.contains("| Not | `~` | Logical | 70 | Prefix |"));
        assert!(text.contains("`/@` ... `@/`"));
        let rows = text.lines().filter(|l| l.starts_with("| ") && !l.starts_with("| Id")).count();
        assert_eq!(
            rows,
            keywords::KEYWORDS.len() + operators::OPERATORS.len() + punctuation::PUNCTUATION.len()
        );
    }
}
