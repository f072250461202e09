//! Diagnostics for the Ra7ma front end.
//!
//! Every problem the lexer and parser find is recorded as a [`Diagnostic`] and scanning/parsing carries on. The
//! driver decides how to present them: either as trace lines (`Line : N Not Matched ...`) or through `miette`'s
//! graphical reporter, which is why [`Diagnostic`] implements [`miette::Diagnostic`].

use std::fmt;

use miette::LabeledSpan;
use thiserror::Error;

use crate::span::Span;

/// Which phase produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Lexical,
    Syntax,
    Semantic,
}

impl Severity {
    /// Stable diagnostic code, shown by the graphical reporter.
    pub const fn code(self) -> &'static str {
        match self {
            Severity::Lexical => "ra7ma::lexical",
            Severity::Syntax => "ra7ma::syntax",
            Severity::Semantic => "ra7ma::semantic",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Lexical => write!(f, "lexical error"),
            Severity::Syntax => write!(f, "syntax error"),
            Severity::Semantic => write!(f, "semantic error"),
        }
    }
}

/// A recorded front-end problem with its location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// 1-based source line.
    pub line: usize,
    pub span: Span,
    pub hints: Vec<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, line: usize, span: Span) -> Self {
        Self {
            severity,
            message: message.into(),
            line,
            span,
            hints: Vec::new(),
        }
    }

    pub fn lexical(message: impl Into<String>, line: usize, span: Span) -> Self {
        Self::new(Severity::Lexical, message, line, span)
    }

    pub fn syntax(message: impl Into<String>, line: usize, span: Span) -> Self {
        Self::new(Severity::Syntax, message, line, span)
    }

    pub fn semantic(message: impl Into<String>, line: usize, span: Span) -> Self {
        Self::new(Severity::Semantic, message, line, span)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Move the diagnostic to another location, keeping its message.
    ///
    /// Used when splicing an included file: its diagnostics are reported at the directive that pulled it in.
    pub fn relocated(mut self, line: usize, span: Span, context: &str) -> Self {
        self.message = format!("{context}: {}", self.message);
        self.line = line;
        self.span = span;
        self
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.severity.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        if self.hints.is_empty() {
            None
        } else {
            Some(Box::new(self.hints.join("\n")))
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::at(
            self.span,
            self.severity.to_string(),
        ))))
    }
}

// ============================================================================
// Diagnostic catalog: the messages the front end emits
// ============================================================================

/// Constructors for every diagnostic message, so wording lives in one place.
pub mod errors {
    use super::*;
    use ra7ma_core::lang::types::{LiteralKind, PrimitiveType};

    pub fn invalid_identifier(lexeme: &str, line: usize, span: Span) -> Diagnostic {
        Diagnostic::lexical(
            format!("Invalid identifier '{lexeme}' - identifiers cannot start with a digit"),
            line,
            span,
        )
    }

    pub fn unexpected_character(c: char, line: usize, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("Unexpected character '{c}'"), line, span)
    }

    pub fn unterminated_comment(line: usize, span: Span) -> Diagnostic {
        Diagnostic::lexical("Unterminated multi-line comment", line, span).with_hint("close the comment with '@/'")
    }

    pub fn unterminated_literal(what: &str, line: usize, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("Unterminated {what} literal"), line, span)
    }

    pub fn invalid_character_literal(lexeme: &str, line: usize, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("Invalid character literal {lexeme}"), line, span)
            .with_hint("a character literal holds exactly one character")
    }

    pub fn unknown_escape(c: char, line: usize, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("Unknown escape sequence '\\{c}'"), line, span)
    }

    pub fn missing_include_path(line: usize, span: Span) -> Diagnostic {
        Diagnostic::lexical("Expected include path", line, span).with_hint("write `Include <file>` or `Include \"file\"`")
    }

    pub fn include_failed(path: &str, cause: &str, line: usize, span: Span) -> Diagnostic {
        Diagnostic::lexical(format!("Could not open include file: {path}"), line, span).with_hint(cause.to_string())
    }

    pub fn expected(what: &str, line: usize, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("Expected {what}"), line, span)
    }

    pub fn already_declared(name: &str, line: usize, span: Span) -> Diagnostic {
        Diagnostic::semantic(format!("Variable '{name}' already declared (line {line})"), line, span)
    }

    pub fn not_declared(name: &str, line: usize, span: Span) -> Diagnostic {
        Diagnostic::semantic(format!("Variable '{name}' not declared before use (line {line})"), line, span)
    }

    /// Function/variable name collisions other than a plain variable redeclaration.
    pub fn name_conflict(error: &impl fmt::Display, line: usize, span: Span) -> Diagnostic {
        Diagnostic::semantic(format!("{error} (line {line})"), line, span)
    }

    pub fn function_not_declared(name: &str, line: usize, span: Span) -> Diagnostic {
        Diagnostic::semantic(format!("Function '{name}' not declared"), line, span)
    }

    pub fn argument_count(name: &str, expected: usize, found: usize, line: usize, span: Span) -> Diagnostic {
        Diagnostic::semantic(
            format!("Function '{name}' expects {expected} argument(s), found {found}"),
            line,
            span,
        )
    }

    pub fn type_mismatch(name: &str, target: PrimitiveType, literal: LiteralKind, line: usize, span: Span) -> Diagnostic {
        Diagnostic::semantic(
            format!("Type mismatch: cannot assign {literal} literal to '{name}' of type {target}"),
            line,
            span,
        )
    }

    pub fn void_variable(name: &str, line: usize, span: Span) -> Diagnostic {
        Diagnostic::semantic(format!("Variable '{name}' cannot have type Void"), line, span)
            .with_hint("`NOReturn` only marks functions that return nothing")
    }

    pub fn break_outside_loop(line: usize, span: Span) -> Diagnostic {
        Diagnostic::semantic("Break statement outside of a loop", line, span)
    }

    pub fn otherwise_without_if(line: usize, span: Span) -> Diagnostic {
        Diagnostic::syntax("'Otherwise' without matching 'IfTrue'", line, span)
    }

    pub fn unexpected_close(line: usize, span: Span) -> Diagnostic {
        Diagnostic::syntax("Unexpected '}'", line, span)
    }

    pub fn unexpanded_include(path: &str, line: usize, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("Include '{path}' was not expanded"), line, span)
            .with_hint("lex with include expansion to splice included files")
    }

    pub fn nesting_too_deep(limit: usize, line: usize, span: Span) -> Diagnostic {
        Diagnostic::syntax(format!("Nesting deeper than {limit} levels"), line, span)
            .with_hint("the innermost construct was skipped without being checked")
    }

    pub fn parser_stuck(iterations: usize, line: usize, span: Span) -> Diagnostic {
        Diagnostic::syntax(
            format!("Parser stuck: no progress after {iterations} iterations, giving up"),
            line,
            span,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic as _;

    #[test]
    fn display_is_the_bare_message() {
        let diag = errors::not_declared("x", 3, Span::new(10, 11));
        assert_eq!(diag.to_string(), "Variable 'x' not declared before use (line 3)");
        assert_eq!(diag.severity, Severity::Semantic);
    }

    #[test]
    fn miette_metadata() {
        let diag = errors::unterminated_comment(1, Span::new(0, 2));
        assert_eq!(diag.code().map(|c| c.to_string()).as_deref(), Some("ra7ma::lexical"));
        assert_eq!(diag.help().map(|h| h.to_string()).as_deref(), Some("close the comment with '@/'"));
        assert_eq!(diag.labels().map(|labels| labels.count()), Some(1));
    }

    #[test]
    fn relocation_prefixes_context() {
        let diag = errors::unexpected_character('$', 4, Span::new(7, 8)).relocated(
            1,
            Span::new(0, 12),
            "in included file 'lib.r7'",
        );
        assert_eq!(diag.line, 1);
        assert_eq!(diag.message, "in included file 'lib.r7': Unexpected character '$'");
    }
}
