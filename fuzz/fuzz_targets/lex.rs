#![no_main]

use libfuzzer_sys::fuzz_target;
use ra7ma::frontend::lexer::{self, TokenKind};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let lexed = lexer::lex(s);
        assert_eq!(lexed.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        assert!(lexed.tokens.windows(2).all(|w| w[0].line <= w[1].line));
    }
});
