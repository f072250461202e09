//! Syntax front end for the Ra7ma language: lexer, include expansion, parser, symbol table, diagnostics.
//!
//! The pipeline is two-phase. [`lexer::lex`] (or [`include::lex_with_includes`]) turns source text into a complete
//! token vector, then [`parser::parse`] walks that vector once, mutating a [`symbols::SymbolTable`] and recording a
//! [`trace::ParseReport`] of matched rules and diagnostics.
//!
//! ## Notes
//! - Nothing in this crate aborts on bad input. Lexical, syntax and semantic problems are all collected as
//!   [`diagnostics::Diagnostic`] values; the only fatal condition is the parser's iteration guard.
//! - Vocabulary identity (keywords/operators/punctuation/types) comes from `ra7ma_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use ra7ma_syntax::{lexer, parser, symbols::SymbolTable};
//!
//! let lexed = lexer::lex("Imw x = +5;");
//! assert!(lexed.diagnostics.is_empty());
//!
//! let mut symbols = SymbolTable::new();
//! let report = parser::parse(&lexed.tokens, &mut symbols);
//! assert_eq!(report.error_count(), 0);
//! assert!(symbols.exists("x"));
//! ```

pub mod config;
pub mod diagnostics;
pub mod include;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod symbols;
pub mod token_helpers;
pub mod trace;

pub use config::FrontendConfig;
pub use diagnostics::{Diagnostic, Severity};
pub use span::Span;
