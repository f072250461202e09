//! `Include` directive scanning.
//!
//! `Include <lib.r7>`, `Include "lib.r7"` and `Include lib.r7` all produce a single
//! [`TokenKind::IncludeDirective`] token whose lexeme is the path. A `;` directly after the path is optional and
//! belongs to the directive.

use super::{Lexer, Token, TokenKind};
use crate::diagnostics::errors;
use crate::span::Span;

impl<'a> Lexer<'a> {
    /// Scan the path of an `Include` directive; the keyword itself was already consumed.
    pub(super) fn scan_include(&mut self, start: usize, line: usize) {
        self.skip_inline_spaces();

        let path = match self.peek() {
            Some(open @ ('<' | '"')) => {
                let close = if open == '<' { '>' } else { '"' };
                self.advance();
                let path_start = self.current_pos;
                while self.peek().is_some_and(|c| c != close && c != '\n') {
                    self.advance();
                }
                let path_end = self.current_pos;
                if !self.match_char(close) {
                    None
                } else {
                    Some((path_start, path_end))
                }
            }
            Some(c) if !c.is_whitespace() && c != ';' => {
                let path_start = self.current_pos;
                while self.peek().is_some_and(|c| !c.is_whitespace() && c != ';') {
                    self.advance();
                }
                Some((path_start, self.current_pos))
            }
            _ => None,
        };

        let source = self.source;
        let Some((path_start, path_end)) = path.filter(|(s, e)| e > s) else {
            let text = source[start..self.current_pos].trim_end();
            let span = Span::new(start, start + text.len());
            self.error(errors::missing_include_path(line, span));
            self.tokens.push(Token::new(TokenKind::Invalid, text, line, span));
            return;
        };

        self.tokens.push(Token::new(
            TokenKind::IncludeDirective,
            &source[path_start..path_end],
            line,
            Span::new(start, self.current_pos),
        ));

        self.skip_inline_spaces();
        self.match_char(';');
    }

    fn skip_inline_spaces(&mut self) {
        while let Some(' ' | '\t') = self.peek() {
            self.advance();
        }
    }
}
