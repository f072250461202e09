//! Punctuation vocabulary.
//!
//! Delimiters and separators used by the lexer and parser.
//!
//! ## Examples
//! ```rust
//! use ra7ma_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_char(';'), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_str(PunctuationId::LBrace), "{");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets, braces and parentheses.
    Delimiter,
    /// `,` and `;`.
    Separator,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Semicolon,
    Comma,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: char,
    pub spelling: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation, ordered by [`PunctuationId`] discriminant.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LBrace, '{', "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, '}', "}", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, '[', "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, ']', "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LParen, '(', "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ')', ")", PunctuationCategory::Delimiter),
    info(PunctuationId::Semicolon, ';', ";", PunctuationCategory::Separator),
    info(PunctuationId::Comma, ',', ",", PunctuationCategory::Separator),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).spelling
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    &PUNCTUATION[id as usize]
}

/// Resolve a punctuation spelling to its identifier.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.spelling == s).map(|p| p.id)
}

/// Resolve a single character to its punctuation identifier.
pub fn from_char(c: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == c).map(|p| p.id)
}

const fn info(
    id: PunctuationId,
    canonical: char,
    spelling: &'static str,
    category: PunctuationCategory,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        spelling,
        category,
    }
}
