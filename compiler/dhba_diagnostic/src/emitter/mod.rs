//! Diagnostic Emitters
//!
//! Rendering of [`Diagnostic`]s for the end user. The compiler only ever
//! produces one fatal diagnostic per run, but emitters accept any number.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in some output format.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}
