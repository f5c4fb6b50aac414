//! Hand-written scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! Main dispatch looks at the current byte only; the digraph operators
//! (`==`, `<=`, `>=`, `!=`) probe one byte of lookahead. Horizontal
//! whitespace and `//` comments are skipped before each token. Newlines are
//! significant and become [`TokenKind::Newline`].

use dhba_ir::{Span, Token, TokenKind};
use tracing::trace;

use crate::cursor::Cursor;
use crate::{LexError, LexErrorKind, SourceBuffer};

/// Pull-based scanner over a [`SourceBuffer`].
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a SourceBuffer) -> Self {
        Scanner {
            cursor: buf.cursor(),
        }
    }

    /// Produce the next token.
    ///
    /// Returns [`TokenKind::Eof`] once the text is exhausted; subsequent
    /// calls keep returning `Eof`.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        self.skip_whitespace();
        self.skip_comment();

        let start = self.cursor.pos();
        let kind = match self.cursor.current() {
            0 if self.cursor.is_eof() => TokenKind::Eof,
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'=' => self.one_or_two(TokenKind::Eq, TokenKind::EqEq),
            b'<' => self.one_or_two(TokenKind::Lt, TokenKind::LtEq),
            b'>' => self.one_or_two(TokenKind::Gt, TokenKind::GtEq),
            b'!' => self.bang(start)?,
            b'\n' => self.single(TokenKind::Newline),
            b'"' => return self.string(start),
            b'0'..=b'9' => self.number(start)?,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            _ => return Err(self.unknown(start)),
        };

        let token = Token::new(
            kind,
            self.cursor.slice_from(start),
            Span::from_offsets(start, self.cursor.pos()),
        );
        trace!(kind = ?token.kind, text = token.text, span = %token.span, "token");
        Ok(token)
    }

    /// Skip spaces, tabs and carriage returns. Newlines are kept.
    fn skip_whitespace(&mut self) {
        self.cursor
            .eat_while(|b| b == b' ' || b == b'\t' || b == b'\r');
    }

    /// Skip a `//` comment up to, but not including, the newline.
    fn skip_comment(&mut self) {
        if self.cursor.current() == b'/' && self.cursor.peek() == b'/' {
            self.cursor.eat_until_newline_or_eof();
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// `=`/`<`/`>` alone, or followed by `=`.
    fn one_or_two(&mut self, one: TokenKind, two: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            two
        } else {
            one
        }
    }

    fn bang(&mut self, start: usize) -> Result<TokenKind, LexError> {
        if self.cursor.peek() == b'=' {
            self.cursor.advance();
            self.cursor.advance();
            return Ok(TokenKind::NotEq);
        }
        let found = self.cursor.peek_char().unwrap_or('\0');
        Err(LexError::new(
            Span::from_offsets(start, start + 1),
            LexErrorKind::ExpectedNotEq { found },
        ))
    }

    /// String literal. The token text is the content between the quotes;
    /// the span covers the quotes too.
    fn string(&mut self, start: usize) -> Result<Token<'a>, LexError> {
        self.cursor.advance();
        let content_start = self.cursor.pos();

        loop {
            match self.cursor.current() {
                b'"' => break,
                b'\r' | b'\n' | b'\t' | b'\\' | b'%' => {
                    let pos = self.cursor.pos();
                    return Err(LexError::new(
                        Span::from_offsets(pos, pos + 1),
                        LexErrorKind::IllegalStringChar {
                            found: char::from(self.cursor.current()),
                        },
                    ));
                }
                0 if self.cursor.is_eof() => {
                    return Err(LexError::new(
                        Span::from_offsets(start, start + 1),
                        LexErrorKind::UnterminatedString,
                    ));
                }
                _ => self.cursor.advance_char(),
            }
        }

        let text = self.cursor.slice_from(content_start);
        self.cursor.advance();
        let token = Token::new(
            TokenKind::Str,
            text,
            Span::from_offsets(start, self.cursor.pos()),
        );
        trace!(kind = ?token.kind, text = token.text, span = %token.span, "token");
        Ok(token)
    }

    /// Digits, optionally followed by `.` and at least one more digit.
    fn number(&mut self, start: usize) -> Result<TokenKind, LexError> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            if !self.cursor.current().is_ascii_digit() {
                let pos = self.cursor.pos();
                return Err(LexError::new(
                    Span::from_offsets(start, pos),
                    LexErrorKind::MalformedNumber,
                ));
            }
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }
        Ok(TokenKind::Number)
    }

    /// Identifier or keyword: `[A-Za-z_][A-Za-z0-9_]*`.
    fn identifier(&mut self, start: usize) -> TokenKind {
        self.cursor
            .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        TokenKind::keyword(self.cursor.slice_from(start)).unwrap_or(TokenKind::Ident)
    }

    fn unknown(&self, start: usize) -> LexError {
        let found = self.cursor.current_char().unwrap_or('\0');
        LexError::new(
            Span::from_offsets(start, start + found.len_utf8()),
            LexErrorKind::UnknownToken { found },
        )
    }
}
