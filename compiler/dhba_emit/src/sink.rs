//! Destinations for a finished artifact.
//!
//! The compiler produces the whole artifact in memory and hands it over in one
//! call, so a sink never sees a partial program.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

/// Receives the finished Go source.
pub trait ArtifactSink {
    /// Persist `artifact`.
    fn write_artifact(&mut self, artifact: &str) -> io::Result<()>;
}

/// Keeps the artifact in memory.
#[derive(Default, Debug)]
pub struct StringSink {
    buffer: String,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last artifact written, or `""`.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl ArtifactSink for StringSink {
    fn write_artifact(&mut self, artifact: &str) -> io::Result<()> {
        self.buffer.clear();
        self.buffer.push_str(artifact);
        Ok(())
    }
}

/// Writes the artifact to a file, replacing any existing one.
///
/// The text is staged in a temporary file in the destination directory and
/// renamed over the destination once fully written. A failed write leaves
/// the destination as it was and removes the staged file.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSink { path: path.into() }
    }

    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl ArtifactSink for FileSink {
    fn write_artifact(&mut self, artifact: &str) -> io::Result<()> {
        debug!(path = %self.path.display(), bytes = artifact.len(), "writing artifact");
        let mut staged = staging_file(self.staging_dir())?;
        staged.write_all(artifact.as_bytes())?;
        staged.flush()?;
        staged.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}

/// Temporary file in `dir`. On Unix it is opened with mode `0o666` before
/// the umask, as `File::create` does.
fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    let builder = builder.prefix(".dhba-");
    #[cfg(unix)]
    let builder = {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666))
    };
    builder.tempfile_in(dir)
}

/// Writes the artifact to any [`Write`] implementation, such as stdout.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer }
    }
}

impl<W: Write> ArtifactSink for WriterSink<W> {
    fn write_artifact(&mut self, artifact: &str) -> io::Result<()> {
        self.writer.write_all(artifact.as_bytes())?;
        self.writer.flush()
    }
}
