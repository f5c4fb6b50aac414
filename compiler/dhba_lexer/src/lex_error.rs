//! Lexer error types.
//!
//! Every lexer error is fatal: the scanner returns it from
//! [`Scanner::next_token`](crate::Scanner::next_token) and the compilation
//! stops. The `span` locates the offending text; `kind` says what was wrong.

use dhba_diagnostic::{Diagnostic, ErrorCode};
use dhba_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// `\r`, `\n`, `\t`, `\` or `%` between the quotes of a string literal.
    #[error("illegal character {found:?} in string literal")]
    IllegalStringChar { found: char },
    /// The text ended inside a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A `.` in a number literal not followed by a digit (e.g. `12.`).
    #[error("illegal character in number: expected a digit after `.`")]
    MalformedNumber,
    /// `!` not followed by `=`.
    #[error("expected `!=`, found `!` followed by {found:?}")]
    ExpectedNotEq { found: char },
    /// A character that cannot start any token.
    #[error("unknown token {found:?}")]
    UnknownToken { found: char },
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::IllegalStringChar { .. } | LexErrorKind::UnterminatedString => {
                ErrorCode::E0001
            }
            LexErrorKind::UnknownToken { .. } => ErrorCode::E0002,
            LexErrorKind::MalformedNumber => ErrorCode::E0003,
            LexErrorKind::ExpectedNotEq { .. } => ErrorCode::E0004,
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match self.kind {
            LexErrorKind::IllegalStringChar { .. } => diag
                .with_label(self.span, "not allowed inside quotes")
                .with_note("string literals cannot contain `\\r`, `\\n`, `\\t`, `\\` or `%`"),
            LexErrorKind::UnterminatedString => {
                diag.with_label(self.span, "string starts here")
            }
            LexErrorKind::MalformedNumber => diag
                .with_label(self.span, "expected a digit")
                .with_note("write `12` or `12.0`, not `12.`"),
            LexErrorKind::ExpectedNotEq { .. } => {
                diag.with_label(self.span, "`!` is only valid as part of `!=`")
            }
            LexErrorKind::UnknownToken { .. } => {
                diag.with_label(self.span, "not part of the language")
            }
        }
    }
}
