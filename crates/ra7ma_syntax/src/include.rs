//! `Include` expansion.
//!
//! The lexer leaves each `Include <path>` in the stream as one [`TokenKind::IncludeDirective`] token.
//! [`lex_with_includes`] replaces those tokens with the tokens of the included text, recursively, asking an
//! [`IncludeResolver`] for that text. Where the text comes from (files relative to the including file, an
//! in-memory map, nothing at all) is the resolver's business.
//!
//! ## Notes
//! - Spliced tokens take the directive's line and span, so line numbers stay non-decreasing across the whole stream
//!   and every diagnostic points into the text the user actually wrote.
//! - A directive that cannot be resolved is a lexical diagnostic (`Could not open include file: ...`); the tokens
//!   after it are lexed as usual.

use thiserror::Error;

use crate::config::FrontendConfig;
use crate::diagnostics::{Diagnostic, errors};
use crate::lexer::{Lexed, Lexer, Token, TokenKind};
use crate::span::Span;

/// Why an include could not be resolved.
#[derive(Debug, Error)]
pub enum IncludeError {
    #[error("no such file: {0}")]
    NotFound(String),
    #[error("include cycle: {0} is already being included")]
    Cycle(String),
    #[error("includes nested more than {0} levels deep")]
    TooDeep(usize),
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("includes are not supported here")]
    Unsupported,
}

/// Supplies the text of included files.
///
/// Calls are nested: every successful [`enter`](IncludeResolver::enter) is matched by one
/// [`leave`](IncludeResolver::leave) after the returned text (and everything it includes) has been lexed. A
/// resolver can use that to resolve relative paths against the including file and to detect cycles.
pub trait IncludeResolver {
    fn enter(&mut self, path: &str) -> Result<String, IncludeError>;
    fn leave(&mut self);
}

/// Resolver for contexts without a file system; every include is reported as unsupported.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIncludes;

impl IncludeResolver for NoIncludes {
    fn enter(&mut self, _path: &str) -> Result<String, IncludeError> {
        Err(IncludeError::Unsupported)
    }

    fn leave(&mut self) {}
}

/// Lex `source`, expanding `Include` directives through `resolver`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex_with_includes(source: &str, resolver: &mut dyn IncludeResolver, config: &FrontendConfig) -> Lexed {
    let mut out = Lexed::default();
    let eof = expand_into(Lexer::new(source).tokenize(), resolver, config, 0, &mut out);
    out.tokens
        .push(eof.unwrap_or_else(|| Token::new(TokenKind::Eof, "", 1, Span::default())));
    out.diagnostics.sort_by_key(|d| d.line);
    tracing::debug!(
        tokens = out.tokens.len(),
        diagnostics = out.diagnostics.len(),
        "lexed source with includes"
    );
    out
}

/// Append `lexed` to `out` with directives expanded; returns the `Eof` token of `lexed`.
fn expand_into(
    lexed: Lexed,
    resolver: &mut dyn IncludeResolver,
    config: &FrontendConfig,
    depth: usize,
    out: &mut Lexed,
) -> Option<Token> {
    out.diagnostics.extend(lexed.diagnostics);

    let mut eof = None;
    for token in lexed.tokens {
        match token.kind {
            TokenKind::Eof => eof = Some(token),
            TokenKind::IncludeDirective => splice(&token, resolver, config, depth, out),
            _ => out.tokens.push(token),
        }
    }
    eof
}

fn splice(
    directive: &Token,
    resolver: &mut dyn IncludeResolver,
    config: &FrontendConfig,
    depth: usize,
    out: &mut Lexed,
) {
    let path = directive.lexeme.as_str();

    let text = if depth >= config.max_include_depth {
        Err(IncludeError::TooDeep(config.max_include_depth))
    } else {
        resolver.enter(path)
    };

    let text = match text {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(path, error = %e, "include failed");
            out.diagnostics.push(failure(directive, &e));
            return;
        }
    };

    tracing::debug!(path, depth = depth + 1, "expanding include");
    let mut nested = Lexed::default();
    expand_into(Lexer::new(&text).tokenize(), resolver, config, depth + 1, &mut nested);
    resolver.leave();

    let context = format!("in included file '{path}'");
    out.tokens.extend(nested.tokens.into_iter().map(|mut token| {
        token.line = directive.line;
        token.span = directive.span;
        token
    }));
    out.diagnostics.extend(
        nested
            .diagnostics
            .into_iter()
            .map(|d| d.relocated(directive.line, directive.span, &context)),
    );
}

fn failure(directive: &Token, error: &IncludeError) -> Diagnostic {
    errors::include_failed(&directive.lexeme, &error.to_string(), directive.line, directive.span)
}
