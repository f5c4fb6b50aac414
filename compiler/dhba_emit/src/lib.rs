//! Output side of the dhba compiler.
//!
//! [`EmitBuffer`] accumulates generated Go text in three regions while the
//! parser runs; [`ArtifactSink`] receives the finished artifact once the whole
//! program has been validated.

mod buffer;
mod sink;

pub use buffer::EmitBuffer;
pub use sink::{ArtifactSink, FileSink, StringSink, WriterSink};
