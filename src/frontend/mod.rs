//! Ra7ma front end, as driven by the CLI
//!
//! - `lexer`, `include`, `parser`, `symbols`, `trace`, `diagnostics`: provided by the shared `ra7ma_syntax` crate
//! - `source`: reading source files with a size limit
//! - `includes`: resolving `Include` directives against the file system
//! - `pipeline`: lex (with includes) then parse, in one call
//! - `report`: scanner listings, traces, symbol dumps and graphical diagnostics

// Syntax components are provided by the shared ra7ma_syntax crate.
pub use ra7ma_syntax::{diagnostics, include, lexer, parser, symbols, trace};

pub mod includes;
pub mod pipeline;
pub mod report;
pub mod source;
