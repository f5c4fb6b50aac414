//! Owned, newline-terminated source buffer.
//!
//! The buffer appends one `\n` to the source at construction, so the final
//! line of every program ends in an end-of-statement token even when the
//! file does not end with a newline. Offsets into the buffer coincide with
//! offsets into the given source for every byte the source contains.

use crate::Cursor;

#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Source text followed by the appended `\n`.
    text: String,
}

impl SourceBuffer {
    pub fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len() + 1);
        text.push_str(source);
        text.push('\n');
        SourceBuffer { text }
    }

    /// Create a cursor positioned at the first byte.
    pub(crate) fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.text)
    }
}
