//! Byte cursor over a [`SourceBuffer`](crate::SourceBuffer).
//!
//! The cursor advances byte-by-byte. Reading at or past the end of the text
//! yields the sentinel `0x00` instead of indexing out of bounds, and the
//! position never moves beyond the text length.
//!
//! # Interior Null Bytes
//!
//! A `0x00` byte inside the text is distinguished from the sentinel by
//! comparing the position against the length; see [`Cursor::is_eof`].

/// Cursor over the buffered text.
///
/// [`Copy`], so the scanner can take cheap snapshots of its position.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Cursor { text, pos: 0 }
    }

    /// Returns the byte at the current position, or `0` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current, or `0` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> u8 {
        self.text.as_bytes().get(pos).copied().unwrap_or(0)
    }

    /// Decode the full character starting at the current position.
    pub fn current_char(&self) -> Option<char> {
        self.char_at(self.pos)
    }

    /// Decode the full character starting one byte ahead.
    ///
    /// Only meaningful when the current byte is ASCII.
    pub fn peek_char(&self) -> Option<char> {
        self.char_at(self.pos + 1)
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|rest| rest.chars().next())
    }

    /// Advance by one byte, saturating at the end of the text.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.text.len() {
            self.pos += 1;
        }
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = self.current_char().map_or(1, char::len_utf8);
        self.pos = (self.pos + width).min(self.text.len());
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Current byte offset in the text.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Extract `start..end` of the text.
    ///
    /// Token boundaries always fall on ASCII bytes, so the range is on
    /// character boundaries; an invalid range yields `""`.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.text.get(start..end).unwrap_or("")
    }

    /// Extract the text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false`, otherwise the loop stops only at EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` (not past it), or to EOF if there is none.
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.text.as_bytes()[self.pos..];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.text.len(),
        }
    }
}
