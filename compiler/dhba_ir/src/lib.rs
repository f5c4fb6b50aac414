//! Shared vocabulary of the dhba compiler.
//!
//! The scanner produces [`Token`]s, the parser consumes them, and diagnostics
//! point back into the source through [`Span`]s. Nothing in here allocates
//! or owns source text: tokens borrow their text from the caller's buffer.

mod span;
mod token;

pub use span::Span;
pub use token::{Token, TokenKind};
