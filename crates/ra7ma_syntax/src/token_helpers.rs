//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to make it easy
//! to work with ID-based tokens.

use crate::lexer::{Token, TokenKind};
use ra7ma_core::lang::keywords::{self, ConditionRole, KeywordCategory, KeywordId};
use ra7ma_core::lang::operators::OperatorId;
use ra7ma_core::lang::punctuation::PunctuationId;
use ra7ma_core::lang::types::{LiteralKind, PrimitiveType};

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return the literal kind, if this is a literal token.
    pub fn literal_kind(&self) -> Option<LiteralKind> {
        match self {
            TokenKind::Literal(kind) => Some(*kind),
            _ => None,
        }
    }

    /// The declared type named by a type keyword (including `NOReturn`).
    pub fn type_keyword(&self) -> Option<PrimitiveType> {
        self.keyword_id().and_then(KeywordId::primitive_type)
    }

    /// Return `true` for any of the four comment token kinds.
    pub fn is_comment(&self) -> bool {
        matches!(
            self,
            TokenKind::SingleComment | TokenKind::MultiCommentStart | TokenKind::MultiCommentEnd | TokenKind::CommentContent
        )
    }

    /// Return `true` for tokens that can begin a new statement, used as recovery points.
    pub fn starts_statement(&self) -> bool {
        match self {
            TokenKind::Keyword(id) => matches!(
                keywords::category(*id),
                KeywordCategory::Type | KeywordCategory::Control | KeywordCategory::Declaration
            ),
            TokenKind::Punctuation(PunctuationId::LBrace) => true,
            TokenKind::SingleComment | TokenKind::MultiCommentStart => true,
            _ => false,
        }
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    /// Which selection branch a condition keyword token opens, by spelling.
    pub fn condition_role(&self) -> Option<ConditionRole> {
        if self.kind.is_keyword(KeywordId::Condition) {
            keywords::condition_role(&self.lexeme)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    #[test]
    fn statement_starters() {
        let lexed = lex("Imw NOReturn IfTrue Otherwise RepeatWhen Turnback OutLoop Loli { /^");
        for token in &lexed.tokens[..10] {
            assert!(token.kind.starts_statement(), "{token:?}");
        }
        for source in ["x", "5", "}", ";", "("] {
            assert!(!lex(source).tokens[0].kind.starts_statement(), "{source}");
        }
    }

    #[test]
    fn condition_role_follows_the_lexeme() {
        let lexed = lex("IfTrue Otherwise");
        assert_eq!(lexed.tokens[0].condition_role(), Some(ConditionRole::If));
        assert_eq!(lexed.tokens[1].condition_role(), Some(ConditionRole::Otherwise));
        assert_eq!(lexed.tokens[2].condition_role(), None);
    }

    #[test]
    fn type_keywords() {
        let lexed = lex("SIMwf NOReturn Loli");
        assert_eq!(lexed.tokens[0].kind.type_keyword(), Some(PrimitiveType::SignedFloat));
        assert_eq!(lexed.tokens[1].kind.type_keyword(), Some(PrimitiveType::Void));
        assert_eq!(lexed.tokens[2].kind.type_keyword(), None);
    }
}
