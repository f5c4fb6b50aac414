//! Diagnostic system for the dhba compiler.
//!
//! Every phase error (lexical, syntactic, semantic) is converted into a
//! [`Diagnostic`]: an [`ErrorCode`] for searchability, a message saying what
//! went wrong, labeled spans saying where, and optional notes. Rendering is
//! left to an [`emitter::DiagnosticEmitter`]; the compiler core never prints.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
