//! Lexer for the Ra7ma language
//!
//! Handles tokenization including:
//! - Keywords (`Imw`, `IfTrue`/`Otherwise`, `RepeatWhen`, `NOReturn`, ...) and identifiers
//! - Unsigned and signed numeric literals (`5`, `+5`, `-3.25`), character and string literals
//! - Operators and punctuation with two-character maximal munch (`==`, `<=`, `&&`, `->`, ...)
//! - `/^` line comments and `/@ ... @/` block comments, kept in the stream as tokens
//! - `Include <path>` directives, emitted as a single token for [`crate::include`] to expand
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `numbers` - Numeric literal scanning and digit-led invalid identifiers
//! - `literals` - Character and string literal scanning
//! - `comments` - Comment scanning
//! - `directives` - `Include` directive scanning
//!
//! ## Notes
//! - Lexing never fails. Problems are recorded in [`Lexed::diagnostics`] and scanning continues; an unexpected
//!   character is dropped after advancing one character.
//! - The token vector always ends with exactly one [`TokenKind::Eof`].

mod comments;
mod directives;
mod literals;
mod numbers;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::diagnostics::{Diagnostic, errors};
use crate::span::Span;
use ra7ma_core::lang::comments as comment_markers;
use ra7ma_core::lang::keywords::KeywordId;
use ra7ma_core::lang::operators::OperatorId;
use ra7ma_core::lang::punctuation::{self, PunctuationId};

/// Output of a lexing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Lexed {
    /// `true` when no lexical problem was found.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Lexer for Ra7ma source code.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    line: usize,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    pub fn tokenize(mut self) -> Lexed {
        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }
            self.scan_token();
        }

        let end = Span::new(self.current_pos, self.current_pos);
        self.tokens.push(Token::new(TokenKind::Eof, "", self.line, end));

        Lexed {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.current_pos = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// The comment delimiter at the cursor, with its byte length.
    fn comment_marker(&self) -> Option<(TokenKind, usize)> {
        let rest = &self.source[self.current_pos..];
        [
            (comment_markers::SINGLE_LINE_START, TokenKind::SingleComment),
            (comment_markers::MULTI_LINE_START, TokenKind::MultiCommentStart),
            (comment_markers::MULTI_LINE_END, TokenKind::MultiCommentEnd),
        ]
        .into_iter()
        .find(|(marker, _)| rest.starts_with(marker))
        .map(|(marker, kind)| (kind, marker.len()))
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.current_pos;
        let line = self.line;

        // Comment delimiters take priority over `/` and `@`.
        if let Some((kind, len)) = self.comment_marker() {
            for _ in 0..len {
                self.advance();
            }
            self.add_token(kind, start, line);
            match kind {
                TokenKind::SingleComment => self.scan_line_comment(),
                TokenKind::MultiCommentStart => self.scan_block_comment(start, line),
                // A stray close marker stays in the stream; the parser skips it like any comment token.
                _ => {}
            }
            return;
        }

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Signed numeric literals
            '+' | '-' if self.peek().is_some_and(|c| c.is_ascii_digit()) => self.scan_number(start, line, true),

            // Operators
            '+' => self.add_op(OperatorId::Plus, start, line),
            '-' => self.operator(start, line, OperatorId::Minus, &[('>', OperatorId::Arrow)]),
            '*' => self.add_op(OperatorId::Star, start, line),
            '/' => self.add_op(OperatorId::Slash, start, line),
            '~' => self.add_op(OperatorId::Not, start, line),
            '=' => self.operator(start, line, OperatorId::Eq, &[('=', OperatorId::EqEq)]),
            '<' => self.operator(start, line, OperatorId::Lt, &[('=', OperatorId::LtEq)]),
            '>' => self.operator(start, line, OperatorId::Gt, &[('=', OperatorId::GtEq)]),
            '!' => self.paired_operator(start, line, c, '=', OperatorId::NotEq),
            '&' => self.paired_operator(start, line, c, '&', OperatorId::AndAnd),
            '|' => self.paired_operator(start, line, c, '|', OperatorId::OrOr),

            // Literals
            '"' => self.scan_string(start, line),
            '\'' => self.scan_char(start, line),
            '0'..='9' => self.scan_number(start, line, false),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start, line),

            _ => match punctuation::from_char(c) {
                Some(id) => self.add_punct(id, start, line),
                None => self.error(errors::unexpected_character(c, line, Span::new(start, self.current_pos))),
            },
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize, line: usize) {
        let lexeme = &self.source[start..self.current_pos];
        self.tokens
            .push(Token::new(kind, lexeme, line, Span::new(start, self.current_pos)));
    }

    fn add_op(&mut self, id: OperatorId, start: usize, line: usize) {
        self.add_token(TokenKind::Operator(id), start, line);
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize, line: usize) {
        self.add_token(TokenKind::Punctuation(id), start, line);
    }

    fn error(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record a lexical error and keep the offending text in the stream as an `Invalid` token.
    fn invalid(&mut self, diagnostic: Diagnostic, start: usize, line: usize) {
        self.error(diagnostic);
        self.add_token(TokenKind::Invalid, start, line);
    }

    /// Try to match a two-character operator, fallback to the single-character one.
    fn operator(&mut self, start: usize, line: usize, simple: OperatorId, compounds: &[(char, OperatorId)]) {
        for (c, id) in compounds {
            if self.match_char(*c) {
                self.add_op(*id, start, line);
                return;
            }
        }
        self.add_op(simple, start, line);
    }

    /// Operators that only exist in their two-character form (`!=`, `&&`, `||`).
    fn paired_operator(&mut self, start: usize, line: usize, first: char, second: char, id: OperatorId) {
        if self.match_char(second) {
            self.add_op(id, start, line);
        } else {
            self.error(errors::unexpected_character(first, line, Span::new(start, self.current_pos)));
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize, line: usize) {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }

        let spelling = &self.source[start..self.current_pos];

        match keyword_id(spelling) {
            Some(KeywordId::Include) => self.scan_include(start, line),
            Some(id) => self.add_token(TokenKind::Keyword(id), start, line),
            None => self.add_token(TokenKind::Ident, start, line),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`. `Include` directives are left in the stream as
/// [`TokenKind::IncludeDirective`] tokens; use [`crate::include::lex_with_includes`] to expand them.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Lexed {
    let lexed = Lexer::new(source).tokenize();
    tracing::debug!(
        tokens = lexed.tokens.len(),
        diagnostics = lexed.diagnostics.len(),
        "lexed source"
    );
    lexed
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use ra7ma_core::lang::types::LiteralKind;

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex(source).tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        use ra7ma_core::lang::keywords;

        for k in keywords::KEYWORDS {
            if k.id == KeywordId::Include {
                continue;
            }
            for spelling in std::iter::once(k.canonical).chain(k.aliases.iter().copied()) {
                let lexed = lex(spelling);
                assert!(lexed.is_clean(), "lex({spelling:?}) reported {:?}", lexed.diagnostics);
                assert_eq!(lexed.tokens.len(), 2, "expected token + EOF for {spelling:?}");
                assert!(lexed.tokens[0].kind.is_keyword(k.id));
                assert_eq!(lexed.tokens[0].lexeme, spelling);
            }
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        use ra7ma_core::lang::operators;

        for o in operators::OPERATORS {
            let lexed = lex(o.spelling);
            assert!(lexed.is_clean(), "lex({:?}) reported {:?}", o.spelling, lexed.diagnostics);
            assert_eq!(lexed.tokens.len(), 2, "expected token + EOF for {:?}", o.spelling);
            assert!(lexed.tokens[0].kind.is_operator(o.id), "{:?}", o.spelling);
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            let lexed = lex(p.spelling);
            assert!(lexed.is_clean());
            assert!(lexed.tokens[0].kind.is_punctuation(p.id), "{:?}", p.spelling);
        }
    }

    #[test]
    fn test_signed_integer_declaration() {
        let lexed = lex("Imw x = +5;");
        assert!(lexed.is_clean());
        assert_eq!(
            kinds("Imw x = +5;"),
            vec![
                TokenKind::Keyword(KeywordId::Integer),
                TokenKind::Ident,
                TokenKind::Operator(OperatorId::Eq),
                TokenKind::Literal(LiteralKind::SignedInteger),
                TokenKind::Punctuation(PunctuationId::Semicolon),
                TokenKind::Eof,
            ]
        );
        assert_eq!(lexed.tokens[1].lexeme, "x");
        assert_eq!(lexed.tokens[3].lexeme, "+5");
    }

    #[test]
    fn test_numeric_literal_kinds() {
        assert_eq!(
            kinds("7 -7 2.5 +2.5 1."),
            vec![
                TokenKind::Literal(LiteralKind::Integer),
                TokenKind::Literal(LiteralKind::SignedInteger),
                TokenKind::Literal(LiteralKind::Float),
                TokenKind::Literal(LiteralKind::SignedFloat),
                TokenKind::Literal(LiteralKind::Integer),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_sign_without_digit_is_an_operator() {
        assert_eq!(
            kinds("a - b"),
            vec![
                TokenKind::Ident,
                TokenKind::Operator(OperatorId::Minus),
                TokenKind::Ident,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_digit_led_identifier_is_invalid() {
        let lexed = lex("3x = 1;");
        assert_eq!(lexed.diagnostics.len(), 1);
        assert_eq!(lexed.diagnostics[0].severity, Severity::Lexical);
        assert!(lexed.diagnostics[0].message.starts_with("Invalid identifier '3x'"));
        assert_eq!(lexed.tokens[0].kind, TokenKind::Invalid);
        assert_eq!(lexed.tokens[0].lexeme, "3x");
        assert_eq!(
            lexed.tokens[1..].iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                TokenKind::Operator(OperatorId::Eq),
                TokenKind::Literal(LiteralKind::Integer),
                TokenKind::Punctuation(PunctuationId::Semicolon),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(
            kinds("== = <= < >= > != && || -> ~"),
            vec![
                TokenKind::Operator(OperatorId::EqEq),
                TokenKind::Operator(OperatorId::Eq),
                TokenKind::Operator(OperatorId::LtEq),
                TokenKind::Operator(OperatorId::Lt),
                TokenKind::Operator(OperatorId::GtEq),
                TokenKind::Operator(OperatorId::Gt),
                TokenKind::Operator(OperatorId::NotEq),
                TokenKind::Operator(OperatorId::AndAnd),
                TokenKind::Operator(OperatorId::OrOr),
                TokenKind::Operator(OperatorId::Arrow),
                TokenKind::Operator(OperatorId::Not),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_unexpected_characters_advance_and_report() {
        let lexed = lex("a $ ! & b");
        let messages: Vec<_> = lexed.diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Unexpected character '$'",
                "Unexpected character '!'",
                "Unexpected character '&'"
            ]
        );
        assert_eq!(
            lexed.tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]
        );
    }

    #[test]
    fn test_line_numbers_are_tracked() {
        let lexed = lex("Imw a;\n\nChj b;\r\n  Series c;");
        let lines: Vec<_> = lexed.tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 1, 3, 3, 3, 4, 4, 4, 4]);
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(kinds("imw"), vec![TokenKind::Ident, TokenKind::Eof]);
        assert_eq!(
            kinds("Otherwise"),
            vec![TokenKind::Keyword(KeywordId::Condition), TokenKind::Eof]
        );
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        let lexed = lex("");
        assert_eq!(lexed.tokens.len(), 1);
        assert_eq!(lexed.tokens[0].kind, TokenKind::Eof);
        assert_eq!(lexed.tokens[0].line, 1);
    }

    #[test]
    fn test_scanner_listing_format() {
        let lexed = lex("Imw x;");
        assert_eq!(lexed.tokens[0].to_string(), "Line: 1 Token Text: Imw Token Type: Integer");
        assert_eq!(lexed.tokens[1].to_string(), "Line: 1 Token Text: x Token Type: Identifier");
    }
}
