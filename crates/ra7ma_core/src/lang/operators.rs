//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the parser needs: precedence, fixity
//! and a coarse category.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact; the lexer does maximal munch on top of it.
//! - `!`, `&` and `|` on their own are **not** operators. Only `!=`, `&&` and `||` are.
//! - `->` is lexed as an access operator but no grammar rule consumes it yet.
//!
//! ## Examples
//! ```rust
//! use ra7ma_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert!(operators::info_for(OperatorId::Star).precedence > operators::info_for(OperatorId::Plus).precedence);
//! ```

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Broad grouping, mirroring the expression grammar's precedence levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Relational,
    Logical,
    Assignment,
    Access,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Relational
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    AndAnd,
    OrOr,
    Not,

    // Assignment
    Eq,

    // Access
    Arrow,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence`: higher binds tighter.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
    pub precedence: u8,
    pub fixity: Fixity,
}

/// Registry of all operators, ordered by [`OperatorId`] discriminant.
pub const OPERATORS: &[OperatorInfo] = &[
    info(OperatorId::Plus, "+", OperatorCategory::Arithmetic, 50, Fixity::Infix),
    info(OperatorId::Minus, "-", OperatorCategory::Arithmetic, 50, Fixity::Infix),
    info(OperatorId::Star, "*", OperatorCategory::Arithmetic, 60, Fixity::Infix),
    info(OperatorId::Slash, "/", OperatorCategory::Arithmetic, 60, Fixity::Infix),
    info(OperatorId::EqEq, "==", OperatorCategory::Relational, 40, Fixity::Infix),
    info(OperatorId::NotEq, "!=", OperatorCategory::Relational, 40, Fixity::Infix),
    info(OperatorId::Lt, "<", OperatorCategory::Relational, 40, Fixity::Infix),
    info(OperatorId::LtEq, "<=", OperatorCategory::Relational, 40, Fixity::Infix),
    info(OperatorId::Gt, ">", OperatorCategory::Relational, 40, Fixity::Infix),
    info(OperatorId::GtEq, ">=", OperatorCategory::Relational, 40, Fixity::Infix),
    info(OperatorId::AndAnd, "&&", OperatorCategory::Logical, 30, Fixity::Infix),
    info(OperatorId::OrOr, "||", OperatorCategory::Logical, 20, Fixity::Infix),
    info(OperatorId::Not, "~", OperatorCategory::Logical, 70, Fixity::Prefix),
    info(OperatorId::Eq, "=", OperatorCategory::Assignment, 10, Fixity::Infix),
    info(OperatorId::Arrow, "->", OperatorCategory::Access, 80, Fixity::Infix),
];

/// Return the spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the full metadata entry for an operator.
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    &OPERATORS[id as usize]
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(s: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == s).map(|o| o.id)
}

/// `true` for the relational operators accepted by the single (non-chained) relational level.
pub fn is_relational(id: OperatorId) -> bool {
    info_for(id).category == OperatorCategory::Relational
}

const fn info(
    id: OperatorId,
    spelling: &'static str,
    category: OperatorCategory,
    precedence: u8,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        category,
        precedence,
        fixity,
    }
}
