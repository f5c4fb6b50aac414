//! Token model shared by the scanner and the parser.
//!
//! Kinds fall into three groups: control and literal kinds, keywords, and
//! operators. Group membership is answered by predicates on [`TokenKind`]
//! rather than by numeric ranges, and keyword recognition is a single
//! lookup from uppercased text to kind ([`TokenKind::keyword`]).

use std::fmt;

use crate::Span;

/// Classification of a token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // === Control and literals ===
    /// End of input.
    Eof,
    /// End of statement (`\n`).
    Newline,
    /// Decimal number literal, e.g. `12` or `3.25`.
    Number,
    /// Identifier that is not a keyword.
    Ident,
    /// Double-quoted string literal; the token text excludes the quotes.
    Str,

    // === Keywords ===
    Label,
    Goto,
    Print,
    Input,
    /// `LET` or its alias `VAR`.
    Let,
    If,
    Then,
    EndIf,
    While,
    Repeat,
    EndWhile,

    // === Operators ===
    /// `=`
    Eq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
}

impl TokenKind {
    /// Resolve `text` to a keyword kind, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not a reserved word, so the caller
    /// falls back to [`TokenKind::Ident`]. Keywords are 2 to 8 characters
    /// long; other lengths are rejected before any case folding.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        if !(2..=8).contains(&text.len()) {
            return None;
        }
        match text.to_ascii_uppercase().as_str() {
            "LABEL" => Some(TokenKind::Label),
            "GOTO" => Some(TokenKind::Goto),
            "PRINT" => Some(TokenKind::Print),
            "INPUT" => Some(TokenKind::Input),
            "LET" | "VAR" => Some(TokenKind::Let),
            "IF" => Some(TokenKind::If),
            "THEN" => Some(TokenKind::Then),
            "ENDIF" => Some(TokenKind::EndIf),
            "WHILE" => Some(TokenKind::While),
            "REPEAT" => Some(TokenKind::Repeat),
            "ENDWHILE" => Some(TokenKind::EndWhile),
            _ => None,
        }
    }

    /// Returns `true` for reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Label
                | TokenKind::Goto
                | TokenKind::Print
                | TokenKind::Input
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::EndIf
                | TokenKind::While
                | TokenKind::Repeat
                | TokenKind::EndWhile
        )
    }

    /// `==`, `!=`, `<`, `<=`, `>`, `>=`.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::EqEq
                | TokenKind::NotEq
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
        )
    }

    /// `+` or `-`: binary additive operators and the unary sign.
    pub fn is_additive(self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus)
    }

    /// `*` or `/`.
    pub fn is_multiplicative(self) -> bool {
        matches!(self, TokenKind::Star | TokenKind::Slash)
    }

    /// Human-readable name used in diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Newline => "newline",
            TokenKind::Number => "number",
            TokenKind::Ident => "identifier",
            TokenKind::Str => "string",
            TokenKind::Label => "`LABEL`",
            TokenKind::Goto => "`GOTO`",
            TokenKind::Print => "`PRINT`",
            TokenKind::Input => "`INPUT`",
            TokenKind::Let => "`LET`",
            TokenKind::If => "`IF`",
            TokenKind::Then => "`THEN`",
            TokenKind::EndIf => "`ENDIF`",
            TokenKind::While => "`WHILE`",
            TokenKind::Repeat => "`REPEAT`",
            TokenKind::EndWhile => "`ENDWHILE`",
            TokenKind::Eq => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::Lt => "`<`",
            TokenKind::LtEq => "`<=`",
            TokenKind::Gt => "`>`",
            TokenKind::GtEq => "`>=`",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A classified lexical unit.
///
/// `text` borrows from the source buffer the scanner was built over; for
/// string literals it is the contents between the quotes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub const fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Token { kind, text, span }
    }

    /// Returns `true` if this token is of `kind`.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Short description for "found ..." messages: the kind, plus the text
    /// for identifiers and literals.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Ident | TokenKind::Number => {
                format!("{} `{}`", self.kind, self.text)
            }
            TokenKind::Str => format!("string \"{}\"", self.text),
            _ => self.kind.display_name().to_string(),
        }
    }
}
