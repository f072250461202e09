//! Comment delimiter vocabulary.
//!
//! Ra7ma comments do not use the C spellings: `/^` opens a single-line comment, `/@ ... @/` brackets a multi-line
//! comment. Both start with a character that is also an operator (`/`) or otherwise unexpected (`@`), so the lexer
//! must check these before falling back to operators.

/// Opens a comment that runs to the end of the line.
pub const SINGLE_LINE_START: &str = "/^";

/// Opens a multi-line comment.
pub const MULTI_LINE_START: &str = "/@";

/// Closes a multi-line comment.
pub const MULTI_LINE_END: &str = "@/";

/// All delimiter spellings, for guardrail checks against the other registries.
pub const ALL: &[&str] = &[SINGLE_LINE_START, MULTI_LINE_START, MULTI_LINE_END];
