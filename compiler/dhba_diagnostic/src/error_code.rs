use std::fmt;

/// Error codes for all compiler diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E0xxx: Lexical errors
/// - E1xxx: Syntax errors
/// - E2xxx: Semantic errors
/// - E9xxx: Driver and internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical Errors (E0xxx)
    /// Illegal character inside a string literal
    E0001,
    /// Unrecognized character in source
    E0002,
    /// Malformed number literal
    E0003,
    /// `!` not followed by `=`
    E0004,

    // Syntax Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression operand
    E1002,
    /// Token cannot start a statement
    E1003,

    // Semantic Errors (E2xxx)
    /// Label declared twice
    E2001,
    /// Variable referenced before assignment
    E2002,
    /// Comparison without a comparison operator
    E2003,
    /// GOTO to a label that is never declared
    E2004,

    // Driver Errors (E9xxx)
    /// Reading the source or writing the artifact failed
    E9001,
}

impl ErrorCode {
    /// Get the string representation (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E9001 => "E9001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
