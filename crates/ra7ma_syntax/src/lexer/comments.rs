//! Comment scanning.
//!
//! Comments are not discarded: the parser matches them as productions, so the lexer keeps the delimiters and the
//! comment text as tokens. A block comment yields one `CommentContent` token per non-blank line.

use super::{Lexer, Token, TokenKind};
use crate::diagnostics::errors;
use crate::span::Span;
use ra7ma_core::lang::comments as comment_markers;

impl<'a> Lexer<'a> {
    /// Scan the text after `/^` up to (not including) the end of the line.
    pub(super) fn scan_line_comment(&mut self) {
        let start = self.current_pos;
        let line = self.line;
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
        let raw = &self.source[start..self.current_pos];
        let text = raw.trim();
        let offset = start + (raw.len() - raw.trim_start().len());
        self.tokens.push(Token::new(
            TokenKind::CommentContent,
            text,
            line,
            Span::new(offset, offset + text.len()),
        ));
    }

    /// Scan the body of a block comment whose opening `/@` started at `open_start`.
    pub(super) fn scan_block_comment(&mut self, open_start: usize, open_line: usize) {
        let mut segment_start = self.current_pos;
        let mut segment_line = self.line;

        loop {
            if self.source[self.current_pos..].starts_with(comment_markers::MULTI_LINE_END) {
                self.push_comment_segment(segment_start, self.current_pos, segment_line);
                let close_start = self.current_pos;
                let close_line = self.line;
                for _ in 0..comment_markers::MULTI_LINE_END.len() {
                    self.advance();
                }
                self.add_token(TokenKind::MultiCommentEnd, close_start, close_line);
                return;
            }

            match self.peek() {
                None => {
                    self.push_comment_segment(segment_start, self.current_pos, segment_line);
                    let span = Span::new(open_start, self.current_pos);
                    self.error(errors::unterminated_comment(open_line, span));
                    return;
                }
                Some('\n') => {
                    self.push_comment_segment(segment_start, self.current_pos, segment_line);
                    self.advance();
                    segment_start = self.current_pos;
                    segment_line = self.line;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }

    fn push_comment_segment(&mut self, start: usize, end: usize, line: usize) {
        let source = self.source;
        let raw = &source[start..end];
        let text = raw.trim();
        if text.is_empty() {
            return;
        }
        let offset = start + (raw.len() - raw.trim_start().len());
        self.tokens.push(Token::new(
            TokenKind::CommentContent,
            text,
            line,
            Span::new(offset, offset + text.len()),
        ));
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{TokenKind, lex};

    #[test]
    fn line_comment_runs_to_end_of_line() {
        let lexed = lex("/^ hello there\nImw x;");
        assert!(lexed.is_clean());
        assert_eq!(lexed.tokens[0].kind, TokenKind::SingleComment);
        assert_eq!(lexed.tokens[1].kind, TokenKind::CommentContent);
        assert_eq!(lexed.tokens[1].lexeme, "hello there");
        assert_eq!(lexed.tokens[2].line, 2);
    }

    #[test]
    fn empty_line_comment_still_has_content_token() {
        let lexed = lex("/^");
        let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::SingleComment, TokenKind::CommentContent, TokenKind::Eof]
        );
        assert_eq!(lexed.tokens[1].lexeme, "");
    }

    #[test]
    fn block_comment_yields_one_part_per_line() {
        let lexed = lex("/@ first\n\n   second @/ Imw");
        assert!(lexed.is_clean());
        let parts: Vec<_> = lexed
            .tokens
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str(), t.line))
            .collect();
        assert_eq!(
            parts,
            vec![
                (TokenKind::MultiCommentStart, "/@", 1),
                (TokenKind::CommentContent, "first", 1),
                (TokenKind::CommentContent, "second", 3),
                (TokenKind::MultiCommentEnd, "@/", 3),
                (TokenKind::Keyword(ra7ma_core::lang::keywords::KeywordId::Integer), "Imw", 3),
                (TokenKind::Eof, "", 3),
            ]
        );
    }

    #[test]
    fn unterminated_block_comment_is_reported_once() {
        let lexed = lex("Imw a;\n/@ never closed\nstill comment");
        assert_eq!(lexed.diagnostics.len(), 1);
        assert_eq!(lexed.diagnostics[0].message, "Unterminated multi-line comment");
        assert_eq!(lexed.diagnostics[0].line, 2);
        assert_eq!(lexed.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        assert!(!lexed.tokens.iter().any(|t| t.kind == TokenKind::MultiCommentEnd));
    }

    #[test]
    fn comment_markers_win_over_slash() {
        let lexed = lex("a / b /^ c");
        let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds.len(), 6);
        assert_eq!(kinds[3], TokenKind::SingleComment);
    }
}
