//! CLI module for the Ra7ma front end
//!
//! ## Commands
//!
//! - `ra7ma <file>` - Lex (with includes) and parse a file, printing the trace
//! - `ra7ma --lex <file>` - Print the scanner listing
//! - `ra7ma --parse <file>` - Parse without include expansion
//! - `ra7ma repl` - Read a program from stdin up to a line `end`
//! - `ra7ma keywords` - Print the language vocabulary
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use ra7ma_syntax::FrontendConfig;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// The input was processed and produced diagnostics.
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The input could not be processed at all.
    pub const USAGE: ExitCode = ExitCode(2);

    /// Success when nothing was reported, failure otherwise.
    pub fn from_error_count(errors: usize) -> Self {
        if errors == 0 { Self::SUCCESS } else { Self::FAILURE }
    }
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create an error for unreadable input (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end for the Ra7ma teaching language
#[derive(Parser, Debug)]
#[command(name = "ra7ma")]
#[command(version = VERSION)]
#[command(about = "Lexer, parser and symbol table for the Ra7ma teaching language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to lex and parse (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Print the scanner listing only
    #[arg(long = "lex", value_name = "FILE", conflicts_with = "file")]
    pub lex_file: Option<PathBuf>,

    /// Parse without expanding includes
    #[arg(long = "parse", value_name = "FILE", conflicts_with_all = ["file", "lex_file"])]
    pub parse_file: Option<PathBuf>,

    /// Dump global variables and functions after parsing
    #[arg(long)]
    pub symbols: bool,

    /// Render diagnostics graphically, with source context
    #[arg(long)]
    pub pretty: bool,

    /// Maximum nesting of Include directives
    #[arg(long, value_name = "N", default_value_t = FrontendConfig::default().max_include_depth)]
    pub max_include_depth: usize,

    /// Skip literal/type compatibility checks
    #[arg(long)]
    pub no_type_check: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read a program from stdin, one line at a time, until a line `end`
    Repl,
    /// Print keywords, operators, punctuation and comment markers
    Keywords,
}

impl Cli {
    /// Output and front-end settings shared by every command.
    pub fn options(&self) -> commands::Options {
        commands::Options {
            show_symbols: self.symbols,
            pretty: self.pretty,
            config: FrontendConfig::new()
                .with_max_include_depth(self.max_include_depth)
                .with_literal_type_checks(!self.no_type_check),
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let options = cli.options();

    // Handle debug flags first
    if let Some(file) = &cli.lex_file {
        return commands::lex_file(file, &options);
    }
    if let Some(file) = &cli.parse_file {
        return commands::parse_file(file, &options);
    }

    match cli.command {
        Some(Command::Repl) => commands::repl(&options),
        Some(Command::Keywords) => commands::keywords(),
        None => match &cli.file {
            Some(file) => commands::compile_file(file, &options),
            None => Err(CliError::usage("Usage: ra7ma [OPTIONS] <FILE>  (try --help)")),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
