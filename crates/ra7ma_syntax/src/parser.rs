//! Parser for the Ra7ma language
//!
//! Walks a token stream once, recursive-descent style, checking it against the grammar while it drives the
//! [`SymbolTable`]'s scope lifecycle. Nothing is built: the output is a [`ParseReport`] listing every matched rule
//! and every diagnostic in order.
//!
//! ## Examples
//!
//! ```rust
//! use ra7ma_syntax::{lexer, parser, symbols::SymbolTable};
//!
//! let lexed = lexer::lex("NOReturn main() { Imw x = 1; Turnback; }");
//! let mut symbols = SymbolTable::new();
//! let report = parser::parse(&lexed.tokens, &mut symbols);
//! assert_eq!(report.error_count(), 0);
//! assert!(symbols.function_exists("main"));
//! assert!(!symbols.exists("x"));
//! ```

use thiserror::Error;

use crate::config::FrontendConfig;
use crate::diagnostics::{Diagnostic, errors};
use crate::lexer::{Token, TokenKind};
use crate::span::Span;
use crate::symbols::{ScopeKind, SymbolError, SymbolTable};
use crate::trace::{ParseReport, Rule, TraceEntry};
use ra7ma_core::lang::keywords::{ConditionRole, KeywordId};
use ra7ma_core::lang::operators::{self, OperatorId};
use ra7ma_core::lang::punctuation::PunctuationId;
use ra7ma_core::lang::types::{self, LiteralKind, PrimitiveType};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
