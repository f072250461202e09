//! Token types for the Ra7ma lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for delimiters and separators
//!
//! ## Notes
//! - Every token keeps its exact source text in `lexeme`, so the token stream can be printed and re-lexed.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use crate::span::Span;
use ra7ma_core::lang::keywords::{self, KeywordId};
use ra7ma_core::lang::operators::OperatorId;
use ra7ma_core::lang::punctuation::PunctuationId;
use ra7ma_core::lang::types::LiteralKind;

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and literals ==========
    Ident,
    Literal(LiteralKind),

    // ========== Comments ==========
    SingleComment,
    MultiCommentStart,
    MultiCommentEnd,
    CommentContent,

    // ========== Special ==========
    /// `Include <path>`; the lexeme is the path.
    IncludeDirective,
    /// Text the lexer reported as an error but kept in the stream.
    Invalid,
    Eof,
}

impl TokenKind {
    /// Name shown in the `Token Type:` column of the scanner listing.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::Keyword(id) => match id {
                KeywordId::Condition => "Condition",
                KeywordId::Loop => "Loop",
                KeywordId::Return => "Return",
                KeywordId::Break => "Break",
                KeywordId::Integer => "Integer",
                KeywordId::SignedInteger => "SInteger",
                KeywordId::Character => "Character",
                KeywordId::Text => "String",
                KeywordId::Float => "Float",
                KeywordId::SignedFloat => "SFloat",
                KeywordId::Void => "Void",
                KeywordId::Struct => "Struct",
                KeywordId::Include => "Inclusion",
            },
            TokenKind::Operator(id) => match id {
                OperatorId::Plus => "Plus",
                OperatorId::Minus => "Minus",
                OperatorId::Star => "Multiply",
                OperatorId::Slash => "Divide",
                OperatorId::EqEq => "Equal",
                OperatorId::NotEq => "NotEqual",
                OperatorId::Lt => "Less",
                OperatorId::LtEq => "LessEqual",
                OperatorId::Gt => "Greater",
                OperatorId::GtEq => "GreaterEqual",
                OperatorId::AndAnd => "And",
                OperatorId::OrOr => "Or",
                OperatorId::Not => "Not",
                OperatorId::Eq => "Assignment",
                OperatorId::Arrow => "Access",
            },
            TokenKind::Punctuation(id) => match id {
                PunctuationId::LBrace => "LeftBrace",
                PunctuationId::RBrace => "RightBrace",
                PunctuationId::LBracket => "LeftBracket",
                PunctuationId::RBracket => "RightBracket",
                PunctuationId::LParen => "LeftParen",
                PunctuationId::RParen => "RightParen",
                PunctuationId::Semicolon => "Semicolon",
                PunctuationId::Comma => "Comma",
            },
            TokenKind::Ident => "Identifier",
            TokenKind::Literal(kind) => match kind {
                LiteralKind::Integer => "IntegerConstant",
                LiteralKind::SignedInteger => "SignedIntegerConstant",
                LiteralKind::Float => "FloatConstant",
                LiteralKind::SignedFloat => "SignedFloatConstant",
                LiteralKind::Character => "CharConstant",
                LiteralKind::Text => "StringConstant",
            },
            TokenKind::SingleComment => "SingleComment",
            TokenKind::MultiCommentStart => "SMultiComment",
            TokenKind::MultiCommentEnd => "EMultiComment",
            TokenKind::CommentContent => "CommentContent",
            TokenKind::IncludeDirective => "IncludeDirective",
            TokenKind::Invalid => "Invalid",
            TokenKind::Eof => "EndOfFile",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its kind, source text, line and span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    /// 1-based source line the token starts on.
    pub line: usize,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            span,
        }
    }
}

impl fmt::Display for Token {
    /// Scanner listing format: `Line: 1 Token Text: Imw Token Type: Integer`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line: {} Token Text: {} Token Type: {}",
            self.line, self.lexeme, self.kind
        )
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
