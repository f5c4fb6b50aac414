//! Command handlers for the `dhba` CLI.
//!
//! Each submodule implements one command. Reading the input and rendering
//! errors are shared and live here.

use std::io::{self, IsTerminal, Read};

use dhba_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use tracing::debug;

use crate::DriverError;

mod build;
mod check;
mod lex;

pub use build::{
    build_file, build_source, output_path, parse_build_options, parse_input_options, BuildOptions,
};
pub use check::check_file;
pub use lex::{lex_file, token_listing};

/// Input path that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// How a command finished. Failures have already been reported on stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => 1,
        }
    }
}

/// A program to compile and the name used for it in diagnostics.
#[derive(Debug)]
pub struct Input {
    pub name: String,
    pub text: String,
}

/// Read the program at `path`, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> Result<Input, DriverError> {
    if path == STDIN_PATH {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(|err| DriverError::read("<stdin>", err))?;
        return Ok(Input {
            name: "<stdin>".to_string(),
            text,
        });
    }

    let text = std::fs::read_to_string(path).map_err(|err| DriverError::read(path, err))?;
    Ok(Input {
        name: path.to_string(),
        text,
    })
}

/// Render `err` on stderr, with a source snippet when `input` is known.
pub(crate) fn report(err: DriverError, input: Option<&Input>, color: ColorMode) {
    debug!(code = %err.code(), "reporting failure");
    let is_tty = io::stderr().is_terminal();
    let diag = err.into_diagnostic();
    let mut emitter = TerminalEmitter::stderr(color, is_tty);
    if let Some(input) = input {
        emitter = emitter
            .with_source(&input.text)
            .with_file_path(input.name.as_str());
    }
    emitter.emit(&diag);
    emitter.flush();
}
