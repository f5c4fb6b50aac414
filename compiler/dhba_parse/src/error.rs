//! Parse and compile error types.
//!
//! [`ParseError`] covers syntax errors and the semantic checks made while
//! parsing. [`CompileError`] is what [`compile`](crate::compile) returns: a
//! scanner error or a parse error, both fatal.

use dhba_diagnostic::{Diagnostic, ErrorCode};
use dhba_ir::{Span, TokenKind};
use dhba_lexer::LexError;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// The grammar required `expected` at this point.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: String },

    /// No number or variable where an operand was required.
    #[error("unexpected token at {found}: expected a number or a variable")]
    ExpectedExpression { found: String },

    /// No statement starts with this token.
    #[error("invalid statement at {found}")]
    InvalidStatement { found: String },

    #[error("label `{name}` already exists")]
    DuplicateLabel { name: String, first: Span },

    #[error("referencing variable before assignment: `{name}`")]
    UseBeforeAssignment { name: String },

    /// A condition with no comparison operator.
    #[error("expected comparison operator at {found}")]
    ExpectedComparison { found: String },

    #[error("attempting to GOTO to undeclared label: `{name}`")]
    UndeclaredLabel { name: String },
}

impl ParseError {
    pub fn new(span: Span, kind: ParseErrorKind) -> Self {
        ParseError { span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::InvalidStatement { .. } => ErrorCode::E1003,
            ParseErrorKind::DuplicateLabel { .. } => ErrorCode::E2001,
            ParseErrorKind::UseBeforeAssignment { .. } => ErrorCode::E2002,
            ParseErrorKind::ExpectedComparison { .. } => ErrorCode::E2003,
            ParseErrorKind::UndeclaredLabel { .. } => ErrorCode::E2004,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => {
                diag.with_label(self.span, format!("expected {expected}"))
            }
            ParseErrorKind::ExpectedExpression { .. } => {
                diag.with_label(self.span, "expected a number or a variable")
            }
            ParseErrorKind::InvalidStatement { .. } => diag
                .with_label(self.span, "not the start of a statement")
                .with_note(
                    "statements start with PRINT, IF, WHILE, LABEL, GOTO, LET, VAR or INPUT",
                ),
            ParseErrorKind::DuplicateLabel { first, .. } => diag
                .with_label(self.span, "declared again here")
                .with_secondary_label(first, "first declared here"),
            ParseErrorKind::UseBeforeAssignment { name } => diag
                .with_label(self.span, "not assigned yet")
                .with_note(format!(
                    "assign it first with `LET {name} = ...` or `INPUT {name}`"
                )),
            ParseErrorKind::ExpectedComparison { .. } => diag
                .with_label(self.span, "expected one of `==`, `!=`, `<`, `<=`, `>`, `>=`")
                .with_note("conditions of IF and WHILE must compare two expressions"),
            ParseErrorKind::UndeclaredLabel { .. } => {
                diag.with_label(self.span, "no LABEL with this name")
            }
        }
    }
}

/// A fatal error from any phase of [`compile`](crate::compile).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CompileError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CompileError::Lex(err) => err.code(),
            CompileError::Parse(err) => err.code(),
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            CompileError::Lex(err) => err.into_diagnostic(),
            CompileError::Parse(err) => err.into_diagnostic(),
        }
    }
}
