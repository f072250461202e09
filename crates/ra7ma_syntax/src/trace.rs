//! Parse trace: the human-readable record of matched rules and diagnostics.
//!
//! The parser does not build a tree. What it hands back is a [`ParseReport`]: every grammar rule it matched and
//! every diagnostic it recorded, in the order they happened, each tagged with a source line.
//!
//! ```text
//! Line : 1 Matched    Rule used: fun-declaration
//! Line : 1 Not Matched    Error: Variable 'x' not declared before use (line 1)
//! Total NO of errors: 1
//! ```

use std::fmt;

use crate::diagnostics::{Diagnostic, Severity};

/// Grammar rules the parser reports when matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Comment,
    CommentPart,
    CommentEnd,
    FunctionDeclaration,
    Declaration,
    StructDeclaration,
    Assignment,
    If,
    IfElse,
    Loop,
    Return,
    Break,
    Block,
    ExpressionStatement,
    EmptyStatement,
}

impl Rule {
    pub const fn as_str(self) -> &'static str {
        match self {
            Rule::Comment => "Comment",
            Rule::CommentPart => "Comment part",
            Rule::CommentEnd => "Comment end",
            Rule::FunctionDeclaration => "fun-declaration",
            Rule::Declaration => "Declaration",
            Rule::StructDeclaration => "Struct declaration",
            Rule::Assignment => "Assignment",
            Rule::If => "If Statement",
            Rule::IfElse => "If/Else Statement",
            Rule::Loop => "Loop Statement",
            Rule::Return => "Return Statement",
            Rule::Break => "Break Statement",
            Rule::Block => "Block",
            Rule::ExpressionStatement => "Expression Statement",
            Rule::EmptyStatement => "Empty Statement",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the parse trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEntry {
    Matched { rule: Rule, line: usize },
    Error(Diagnostic),
}

impl TraceEntry {
    pub fn line(&self) -> usize {
        match self {
            TraceEntry::Matched { line, .. } => *line,
            TraceEntry::Error(diagnostic) => diagnostic.line,
        }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEntry::Matched { rule, line } => write!(f, "Line : {line} Matched    Rule used: {rule}"),
            TraceEntry::Error(diagnostic) => {
                write!(f, "Line : {} Not Matched    Error: {}", diagnostic.line, diagnostic.message)
            }
        }
    }
}

/// Result of one parser run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub trace: Vec<TraceEntry>,
    /// Top-level loop iterations used.
    pub iterations: usize,
    /// `true` if the iteration guard stopped the parse.
    pub halted: bool,
}

impl ParseReport {
    /// Diagnostics in the order they were recorded.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.trace.iter().filter_map(|entry| match entry {
            TraceEntry::Error(diagnostic) => Some(diagnostic),
            TraceEntry::Matched { .. } => None,
        })
    }

    /// Matched rules with their lines, in order.
    pub fn matched(&self) -> impl Iterator<Item = (Rule, usize)> + '_ {
        self.trace.iter().filter_map(|entry| match entry {
            TraceEntry::Matched { rule, line } => Some((*rule, *line)),
            TraceEntry::Error(_) => None,
        })
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics().count()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics().filter(|d| d.severity == severity).count()
    }

    /// The closing line of a trace listing.
    pub fn summary(&self) -> String {
        format!("Total NO of errors: {}", self.error_count())
    }
}

impl fmt::Display for ParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.trace {
            writeln!(f, "{entry}")?;
        }
        write!(f, "{}", self.summary())
    }
}
