//! Numeric literal scanning.
//!
//! Four literal kinds come out of here: unsigned/signed integer and unsigned/signed float. A sign only belongs
//! to the literal when it is immediately followed by a digit (the caller checks that before dispatching).
//! A digit-led run that continues with identifier characters (`3x`, `12abc`) is an invalid identifier.

use super::{Lexer, TokenKind, is_ident_continue};
use crate::diagnostics::errors;
use crate::span::Span;
use ra7ma_core::lang::types::LiteralKind;

impl<'a> Lexer<'a> {
    /// Scan a numeric literal whose first character (a digit, or the sign) was already consumed.
    pub(super) fn scan_number(&mut self, start: usize, line: usize, signed: bool) {
        self.consume_digits();

        let mut float = false;
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.consume_digits();
            float = true;
        }

        if self.peek().is_some_and(is_ident_continue) {
            while self.peek().is_some_and(is_ident_continue) {
                self.advance();
            }
            let lexeme = &self.source[start..self.current_pos];
            let diagnostic = errors::invalid_identifier(lexeme, line, Span::new(start, self.current_pos));
            self.invalid(diagnostic, start, line);
            return;
        }

        self.add_token(TokenKind::Literal(LiteralKind::numeric(signed, float)), start, line);
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}
