//! Scanner for dhemiaBASIC.
//!
//! Converts source text into [`Token`]s one at a time, on demand. The
//! parser pulls tokens through [`Scanner::next_token`]; the `lex` command and
//! tests use [`tokenize`] to collect the whole stream.
//!
//! ```
//! use dhba_ir::TokenKind;
//! use dhba_lexer::{tokenize, SourceBuffer};
//!
//! let buf = SourceBuffer::new("PRINT x");
//! let kinds: Vec<_> = tokenize(&buf)?.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Print, TokenKind::Ident, TokenKind::Newline, TokenKind::Eof]
//! );
//! # Ok::<(), dhba_lexer::LexError>(())
//! ```

mod cursor;
mod lex_error;
mod scanner;
mod source_buffer;

pub(crate) use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;
pub use source_buffer::SourceBuffer;

use dhba_ir::{Token, TokenKind};

/// Scan the whole buffer, returning every token up to and including `Eof`.
pub fn tokenize(buf: &SourceBuffer) -> Result<Vec<Token<'_>>, LexError> {
    let mut scanner = Scanner::new(buf);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token()?;
        tokens.push(token);
        if token.is(TokenKind::Eof) {
            return Ok(tokens);
        }
    }
}
