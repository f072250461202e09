//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

use ra7ma_syntax::include::{IncludeResolver, NoIncludes};
use ra7ma_syntax::{Diagnostic, FrontendConfig, lexer};

use super::{CliError, CliResult, ExitCode};
use crate::frontend::includes::FsIncludeResolver;
use crate::frontend::pipeline::{Analysis, analyze};
use crate::frontend::report;
use crate::frontend::source::read_source;

/// Name used for diagnostics when the program comes from stdin.
const STDIN_NAME: &str = "<stdin>";

/// A line consisting of exactly this ends interactive input.
const END_OF_INPUT: &str = "end";

/// Output and front-end settings shared by every command.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Dump the symbol table after the trace
    pub show_symbols: bool,
    /// Render diagnostics with miette instead of trace lines
    pub pretty: bool,
    pub config: FrontendConfig,
}

fn load(path: &Path) -> CliResult<String> {
    read_source(path).map_err(|e| CliError::usage(e.to_string()))
}

/// Tokenize a file and print the scanner listing.
pub fn lex_file(path: &Path, options: &Options) -> CliResult<ExitCode> {
    let source = load(path)?;
    let lexed = lexer::lex(&source);

    print!("{}", report::scanner_listing(&lexed.tokens));
    if options.pretty {
        eprint!("{}", render_pretty(&path.display().to_string(), &source, &lexed.diagnostics)?);
    } else {
        for diagnostic in &lexed.diagnostics {
            println!("{}", report::diagnostic_line(diagnostic));
        }
    }
    Ok(ExitCode::from_error_count(lexed.diagnostics.len()))
}

/// Parse a file without expanding `Include` directives.
pub fn parse_file(path: &Path, options: &Options) -> CliResult<ExitCode> {
    let source = load(path)?;
    let analysis = analyze(&source, &mut NoIncludes, &options.config);
    emit(&path.display().to_string(), &source, &analysis, options)
}

/// Lex with includes resolved next to `path`, then parse.
pub fn compile_file(path: &Path, options: &Options) -> CliResult<ExitCode> {
    let source = load(path)?;
    let mut resolver = FsIncludeResolver::for_entry(path);
    let analysis = analyze(&source, &mut resolver, &options.config);
    tracing::debug!(included = resolver.included_files().count(), "resolved includes");
    emit(&path.display().to_string(), &source, &analysis, options)
}

/// Interactive mode: read lines up to `end`, then print the scanner listing and the trace.
pub fn repl(options: &Options) -> CliResult<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("Enter your Ra7ma code (type '{END_OF_INPUT}' alone to finish input):");
    let source = read_session(stdin.lock(), &mut stdout)
        .map_err(|e| CliError::usage(format!("Error reading standard input: {e}")))?;

    let cwd = env::current_dir()
        .map_err(|e| CliError::usage(format!("Cannot resolve the working directory: {e}")))?;
    let mut resolver = FsIncludeResolver::new(cwd);
    run_session(&source, &mut resolver, options)
}

/// Lex and parse one interactive buffer.
fn run_session(source: &str, resolver: &mut dyn IncludeResolver, options: &Options) -> CliResult<ExitCode> {
    let analysis = analyze(source, resolver, &options.config);
    println!("\n--- Scanner Output ---");
    print!("{}", report::scanner_listing(&analysis.lexed.tokens));
    println!("\n--- Parser Output ---");
    emit(STDIN_NAME, source, &analysis, options)
}

/// Collect lines from `input` until a line `end` or end of input, prompting with `> ` before each.
pub fn read_session(mut input: impl BufRead, prompt: &mut impl Write) -> io::Result<String> {
    let mut buffer = String::new();
    let mut line = String::new();
    loop {
        write!(prompt, "> ")?;
        prompt.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if line == END_OF_INPUT {
            break;
        }
        buffer.push_str(line);
        buffer.push('\n');
    }
    Ok(buffer)
}

/// Print the vocabulary tables.
pub fn keywords() -> CliResult<ExitCode> {
    print!("{}", report::vocabulary());
    Ok(ExitCode::SUCCESS)
}

/// Print lexical diagnostics, the trace and (optionally) the symbol table.
fn emit(name: &str, source: &str, analysis: &Analysis, options: &Options) -> CliResult<ExitCode> {
    if options.pretty {
        let diagnostics = analysis.lexed.diagnostics.iter().chain(analysis.report.diagnostics());
        eprint!("{}", render_pretty(name, source, diagnostics)?);
        print!("{}", report::trace(&analysis.report, false));
    } else {
        for diagnostic in &analysis.lexed.diagnostics {
            println!("{}", report::diagnostic_line(diagnostic));
        }
        print!("{}", report::trace(&analysis.report, true));
    }

    if options.show_symbols {
        println!("\n--- Symbol Table ---");
        print!("{}", report::symbol_dump(&analysis.symbols));
    }
    Ok(ExitCode::from_error_count(analysis.error_count()))
}

fn render_pretty<'d>(
    name: &str,
    source: &str,
    diagnostics: impl IntoIterator<Item = &'d Diagnostic>,
) -> CliResult<String> {
    report::pretty(name, source, diagnostics)
        .map_err(|e| CliError::failure(format!("Error rendering diagnostics: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn session_stops_at_end_line() {
        let input = "Imw x;\r\nx = 1;\nend\nImw ignored;\n";
        let mut prompts = Vec::new();
        let source = read_session(input.as_bytes(), &mut prompts).unwrap();
        assert_eq!(source, "Imw x;\nx = 1;\n");
        assert_eq!(String::from_utf8(prompts).unwrap(), "> > > ");
    }

    #[test]
    fn session_without_end_reads_to_eof() {
        let mut prompts = Vec::new();
        let source = read_session("Imw x;\n  end  \n".as_bytes(), &mut prompts).unwrap();
        assert_eq!(source, "Imw x;\n  end  \n");
    }

    #[test]
    fn session_exit_code_follows_diagnostics() {
        let options = Options::default();
        let clean = run_session("Imw x = 1;\n", &mut NoIncludes, &options).unwrap();
        assert_eq!(clean, ExitCode::SUCCESS);
        let broken = run_session("Imw x = ;\n", &mut NoIncludes, &options).unwrap();
        assert_eq!(broken, ExitCode::FAILURE);
    }
}
