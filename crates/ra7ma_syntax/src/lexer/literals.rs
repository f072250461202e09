//! Character and string literal scanning.
//!
//! Lexemes keep the quotes and escapes exactly as written; nothing downstream needs the decoded value.
//! Recognized escapes: `\n`, `\t`, `\\`, `\"`, `\'`, `\0`.

use super::{Lexer, TokenKind};
use crate::diagnostics::errors;
use crate::span::Span;
use ra7ma_core::lang::types::LiteralKind;

const ESCAPES: &[char] = &['n', 't', '\\', '"', '\'', '0'];

impl<'a> Lexer<'a> {
    /// Scan a string literal; the opening `"` was already consumed.
    pub(super) fn scan_string(&mut self, start: usize, line: usize) {
        loop {
            match self.peek() {
                None | Some('\n') => {
                    let diagnostic = errors::unterminated_literal("string", line, Span::new(start, self.current_pos));
                    self.invalid(diagnostic, start, line);
                    return;
                }
                Some('"') => {
                    self.advance();
                    self.add_token(TokenKind::Literal(LiteralKind::Text), start, line);
                    return;
                }
                Some('\\') => {
                    self.advance();
                    self.scan_escape();
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    /// Scan a character literal; the opening `'` was already consumed.
    pub(super) fn scan_char(&mut self, start: usize, line: usize) {
        let mut count = 0usize;
        loop {
            match self.peek() {
                None | Some('\n') => {
                    let diagnostic =
                        errors::unterminated_literal("character", line, Span::new(start, self.current_pos));
                    self.invalid(diagnostic, start, line);
                    return;
                }
                Some('\'') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    self.scan_escape();
                    count += 1;
                }
                Some(_) => {
                    self.advance();
                    count += 1;
                }
            }
        }

        if count == 1 {
            self.add_token(TokenKind::Literal(LiteralKind::Character), start, line);
        } else {
            let span = Span::new(start, self.current_pos);
            let diagnostic = errors::invalid_character_literal(&self.source[start..self.current_pos], line, span);
            self.invalid(diagnostic, start, line);
        }
    }

    /// Consume the character after a backslash, reporting unknown escapes.
    fn scan_escape(&mut self) {
        let backslash = self.current_pos - 1;
        match self.peek() {
            Some(c) if ESCAPES.contains(&c) => {
                self.advance();
            }
            Some(c) if c != '\n' => {
                self.advance();
                let span = Span::new(backslash, self.current_pos);
                self.error(errors::unknown_escape(c, self.line, span));
            }
            _ => {}
        }
    }
}
