//! The dhemiaBASIC compiler driver.
//!
//! Reads a `.dhba` program from a file or stdin, compiles it with
//! [`dhba_parse::compile`] and writes the Go artifact through a
//! [`dhba_emit::ArtifactSink`]. Errors are rendered as diagnostics on stderr.
//!
//! # Logging
//!
//! Set `DHBA_LOG` (or `RUST_LOG`) to a `tracing` filter to see what the
//! compiler is doing:
//!
//! - `DHBA_LOG=debug`: phase boundaries, declared variables and labels
//! - `DHBA_LOG=dhba_lexer=trace`: every token
//! - `DHBA_LOG=dhba_parse=trace`: every parser step

pub mod commands;
mod error;
mod tracing_setup;

pub use error::DriverError;
pub use tracing_setup::init_tracing;
