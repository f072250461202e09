//! Provide the canonical language vocabulary for the Ra7ma front end.
//!
//! This crate is intentionally small and dependency-free. The lexer, parser and driver all resolve spellings and
//! type rules through it instead of scattering string comparisons across the compiler.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global mutable state, and no parser types.
//! - Current scope: keywords (with aliases), operators, punctuation, comment delimiters, primitive types and the
//!   literal/type compatibility table.

pub mod lang;
