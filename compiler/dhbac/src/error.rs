//! Driver errors: I/O around the compiler, or the compiler itself.

use std::io;

use dhba_diagnostic::{Diagnostic, ErrorCode};
use dhba_parse::CompileError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("cannot write '{path}': {source}")]
    Write { path: String, source: io::Error },

    #[error(transparent)]
    Compile(#[from] CompileError),
}

impl DriverError {
    /// Classify a failure to read `path`.
    pub fn read(path: &str, err: io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => DriverError::NotFound { path },
            io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Read { path, source: err },
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DriverError::Compile(err) => err.code(),
            _ => ErrorCode::E9001,
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            DriverError::Compile(err) => err.into_diagnostic(),
            other => Diagnostic::error(ErrorCode::E9001).with_message(other.to_string()),
        }
    }
}
