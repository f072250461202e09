//! Ra7ma language vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings and metadata via the
//! const registry tables in each submodule.
//!
//! ## Notes
//! - Registries are **pure**: no token types, no IO, no side effects.
//! - Every table is ordered by its id's discriminant so lookups by id are a plain index. The guardrail tests in
//!   `tests/lang_registry_guardrails.rs` keep that ordering honest.
//!
//! ## Examples
//! ```rust
//! use ra7ma_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("Imw"), Some(KeywordId::Integer));
//! assert_eq!(keywords::from_str("Otherwise"), Some(KeywordId::Condition));
//! assert_eq!(keywords::as_str(KeywordId::Loop), "RepeatWhen");
//! ```

pub mod comments;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod types;
