#![forbid(unsafe_code)]
//! Ra7ma teaching-language front end
//!
//! This crate is the driver around `ra7ma_syntax`: it resolves `Include` directives against the file system, runs
//! the lexer and parser over a file or an interactive buffer, and renders the scanner listing, the parse trace and
//! the symbol table.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod frontend;

pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::symbols;

pub use frontend::pipeline::{Analysis, analyze};
