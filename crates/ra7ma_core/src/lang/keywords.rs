//! Define the reserved keyword vocabulary for the Ra7ma language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, aliases and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**. `imw` is an identifier, `Imw` is a keyword.
//! - `IfTrue` and `Otherwise` resolve to the same [`KeywordId::Condition`]; the parser asks [`condition_role`] which
//!   branch a given spelling opens. `RepeatWhen` and `Reiterate` both resolve to [`KeywordId::Loop`].
//!
//! ## Examples
//! ```rust
//! use ra7ma_core::lang::keywords::{self, ConditionRole, KeywordId};
//!
//! assert_eq!(keywords::from_str("Turnback"), Some(KeywordId::Return));
//! assert_eq!(keywords::condition_role("Otherwise"), Some(ConditionRole::Otherwise));
//! ```

use super::types::PrimitiveType;

/// Stable identifier for every reserved keyword.
///
/// ## Notes
/// - The canonical spelling is accessible via [`as_str`].
/// - Accepted aliases are accessible via [`aliases`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow
    Condition,
    Loop,
    Return,
    Break,

    // Types
    Integer,
    SignedInteger,
    Character,
    Text,
    Float,
    SignedFloat,
    Void,

    // Declarations / directives
    Struct,
    Include,
}

/// High-level grouping, used by the parser to decide what can start a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Control,
    Type,
    Declaration,
    Directive,
}

/// Which branch of a selection statement a condition keyword spelling opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionRole {
    If,
    Otherwise,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub category: KeywordCategory,
    pub description: &'static str,
}

/// Registry of all keywords, ordered by [`KeywordId`] discriminant.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(
        KeywordId::Condition,
        "IfTrue",
        &["Otherwise"],
        KeywordCategory::Control,
        "selection; the alias opens the alternative branch",
    ),
    info(
        KeywordId::Loop,
        "RepeatWhen",
        &["Reiterate"],
        KeywordCategory::Control,
        "pre-tested loop",
    ),
    info(KeywordId::Return, "Turnback", &[], KeywordCategory::Control, "return from function"),
    info(KeywordId::Break, "OutLoop", &[], KeywordCategory::Control, "leave the innermost loop"),
    info(KeywordId::Integer, "Imw", &[], KeywordCategory::Type, "integer"),
    info(KeywordId::SignedInteger, "SIMw", &[], KeywordCategory::Type, "signed integer"),
    info(KeywordId::Character, "Chj", &[], KeywordCategory::Type, "character"),
    info(KeywordId::Text, "Series", &[], KeywordCategory::Type, "string"),
    info(KeywordId::Float, "IMwf", &[], KeywordCategory::Type, "float"),
    info(KeywordId::SignedFloat, "SIMwf", &[], KeywordCategory::Type, "signed float"),
    info(KeywordId::Void, "NOReturn", &[], KeywordCategory::Type, "no-return function marker"),
    info(KeywordId::Struct, "Loli", &[], KeywordCategory::Declaration, "struct declaration"),
    info(KeywordId::Include, "Include", &[], KeywordCategory::Directive, "textual inclusion"),
];

impl KeywordId {
    /// The primitive type named by a type keyword, if this is one.
    pub const fn primitive_type(self) -> Option<PrimitiveType> {
        match self {
            KeywordId::Integer => Some(PrimitiveType::Integer),
            KeywordId::SignedInteger => Some(PrimitiveType::SignedInteger),
            KeywordId::Character => Some(PrimitiveType::Character),
            KeywordId::Text => Some(PrimitiveType::Text),
            KeywordId::Float => Some(PrimitiveType::Float),
            KeywordId::SignedFloat => Some(PrimitiveType::SignedFloat),
            KeywordId::Void => Some(PrimitiveType::Void),
            KeywordId::Condition
            | KeywordId::Loop
            | KeywordId::Return
            | KeywordId::Break
            | KeywordId::Struct
            | KeywordId::Include => None,
        }
    }

    /// `true` for keywords naming a value type (everything in [`KeywordCategory::Type`] except `NOReturn`).
    pub const fn is_value_type(self) -> bool {
        matches!(self.primitive_type(), Some(ty) if !matches!(ty, PrimitiveType::Void))
    }
}

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Accepted alias spellings.
pub fn aliases(id: KeywordId) -> &'static [&'static str] {
    info_for(id).aliases
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Returns
/// - The associated [`KeywordInfo`] from [`KEYWORDS`].
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    &KEYWORDS[id as usize]
}

/// Lookup by spelling (canonical or alias).
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.canonical == s) {
        return Some(k.id);
    }
    KEYWORDS.iter().find(|k| k.aliases.contains(&s)).map(|k| k.id)
}

/// Resolve which branch a condition keyword spelling opens.
///
/// ## Returns
/// - `Some(ConditionRole::If)` for `IfTrue`, `Some(ConditionRole::Otherwise)` for `Otherwise`.
/// - `None` for any other spelling.
pub fn condition_role(spelling: &str) -> Option<ConditionRole> {
    let info = info_for(KeywordId::Condition);
    if spelling == info.canonical {
        Some(ConditionRole::If)
    } else if info.aliases.contains(&spelling) {
        Some(ConditionRole::Otherwise)
    } else {
        None
    }
}

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        aliases,
        category,
        description,
    }
}
