//! Recursive-descent parser that emits Go as it recognizes each construct.
//!
//! Grammar:
//!
//! ```text
//! program    := NEWLINE* statement* EOF
//! statement  := PRINT (STRING | expr) nl
//!             | IF comparison THEN nl statement* ENDIF nl
//!             | WHILE comparison REPEAT nl statement* ENDWHILE nl
//!             | LABEL IDENT nl
//!             | GOTO IDENT nl
//!             | (LET | VAR) IDENT "=" expr nl
//!             | INPUT IDENT nl
//! comparison := expr (("==" | "!=" | "<" | "<=" | ">" | ">=") expr)+
//! expr       := term (("+" | "-") term)*
//! term       := unary (("*" | "/") unary)*
//! unary      := ("+" | "-")? primary
//! primary    := NUMBER | IDENT
//! nl         := NEWLINE+
//! ```

use dhba_emit::EmitBuffer;
use dhba_ir::{Token, TokenKind};
use dhba_lexer::{Scanner, SourceBuffer};
use dhba_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::codegen;
use crate::{CompileError, LabelTable, ParseError, ParseErrorKind};

/// Parser state for one compilation.
///
/// Holds the current token and one token of lookahead. Both borrow from the
/// [`SourceBuffer`], so names can be stored without copying.
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    cur: Token<'a>,
    peek: Token<'a>,
    out: EmitBuffer,
    /// Variables assigned so far. Only grows.
    vars: FxHashSet<&'a str>,
    labels: LabelTable<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser and read the first two tokens.
    pub fn new(buf: &'a SourceBuffer) -> Result<Self, CompileError> {
        let mut scanner = Scanner::new(buf);
        let cur = scanner.next_token()?;
        let peek = scanner.next_token()?;
        Ok(Parser {
            scanner,
            cur,
            peek,
            out: EmitBuffer::new(),
            vars: FxHashSet::default(),
            labels: LabelTable::new(),
        })
    }

    /// Parse the whole program and return the finished Go source.
    pub fn program(mut self) -> Result<String, CompileError> {
        for line in codegen::PREAMBLE {
            self.out.header_line(line);
        }
        self.out.indent();

        while self.check(TokenKind::Newline) {
            self.advance()?;
        }

        while !self.check(TokenKind::Eof) {
            self.statement()?;
        }

        self.out.dedent();
        self.out.emit_line_indented(codegen::BLOCK_CLOSE);

        self.labels.finalize()?;
        debug!(variables = self.vars.len(), "program parsed");
        Ok(self.out.finish())
    }

    // --- Token handling ---

    fn check(&self, kind: TokenKind) -> bool {
        self.cur.is(kind)
    }

    /// Shift the lookahead into the current slot, returning the old current
    /// token.
    fn advance(&mut self) -> Result<Token<'a>, CompileError> {
        let prev = self.cur;
        self.cur = self.peek;
        self.peek = self.scanner.next_token()?;
        trace!(kind = ?self.cur.kind, span = %self.cur.span, "advance");
        Ok(prev)
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'a>, CompileError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.error(ParseErrorKind::UnexpectedToken {
                expected: kind,
                found: self.cur.describe(),
            }))
        }
    }

    fn error(&self, kind: ParseErrorKind) -> CompileError {
        ParseError::new(self.cur.span, kind).into()
    }

    // --- Statements ---

    fn statement(&mut self) -> Result<(), CompileError> {
        ensure_sufficient_stack(|| self.statement_inner())
    }

    fn statement_inner(&mut self) -> Result<(), CompileError> {
        match self.cur.kind {
            TokenKind::Print => self.print()?,
            TokenKind::If => self.block(codegen::IF, TokenKind::Then, TokenKind::EndIf)?,
            TokenKind::While => self.block(codegen::FOR, TokenKind::Repeat, TokenKind::EndWhile)?,
            TokenKind::Label => self.label()?,
            TokenKind::Goto => self.goto()?,
            TokenKind::Let => self.assignment()?,
            TokenKind::Input => self.input()?,
            _ => {
                return Err(self.error(ParseErrorKind::InvalidStatement {
                    found: self.cur.describe(),
                }));
            }
        }
        self.nl()
    }

    fn print(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        if self.check(TokenKind::Str) {
            let text = self.advance()?.text;
            self.out.emit_line_indented(&codegen::println_string(text));
        } else {
            self.out.emit_indented(codegen::PRINTLN_OPEN);
            self.expr()?;
            self.out.emit_line(codegen::PRINTLN_CLOSE);
        }
        Ok(())
    }

    /// `IF` and `WHILE`: a keyword, a comparison, the opening keyword, a
    /// newline, nested statements and the closing keyword.
    fn block(
        &mut self,
        keyword: &str,
        open: TokenKind,
        close: TokenKind,
    ) -> Result<(), CompileError> {
        self.advance()?;
        self.out.emit_indented(keyword);
        self.comparison()?;
        self.expect(open)?;
        self.out.emit_line(codegen::BLOCK_OPEN);
        self.nl()?;
        self.out.indent();

        while !self.check(close) {
            if self.check(TokenKind::Eof) {
                return Err(self.error(ParseErrorKind::UnexpectedToken {
                    expected: close,
                    found: self.cur.describe(),
                }));
            }
            self.statement()?;
        }

        self.advance()?;
        self.out.dedent();
        self.out.emit_line_indented(codegen::BLOCK_CLOSE);
        Ok(())
    }

    fn label(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        let name = self.expect(TokenKind::Ident)?;
        self.labels.declare(name.text, name.span)?;
        self.out.emit_line_indented(&codegen::label(name.text));
        Ok(())
    }

    fn goto(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        let name = self.expect(TokenKind::Ident)?;
        self.labels.reference(name.text, name.span);
        self.out.emit_line_indented(&codegen::goto(name.text));
        Ok(())
    }

    /// `LET x = e` / `VAR x = e`. The target counts as assigned from here on,
    /// including inside `e`.
    fn assignment(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        let name = self.expect(TokenKind::Ident)?.text;
        self.declare_var(name);
        self.out.emit_indented(&codegen::assign(name));
        self.expect(TokenKind::Eq)?;
        self.expr()?;
        self.out.emit_line("");
        Ok(())
    }

    fn input(&mut self) -> Result<(), CompileError> {
        self.advance()?;
        let name = self.expect(TokenKind::Ident)?.text;
        self.declare_var(name);
        self.out.emit_line_indented(&codegen::scan(name));
        Ok(())
    }

    fn declare_var(&mut self, name: &'a str) {
        if self.vars.insert(name) {
            debug!(variable = name, "declared variable");
            self.out.decl_line(&codegen::declaration(name));
        }
    }

    // --- Expressions ---

    /// At least one comparison operator is required.
    fn comparison(&mut self) -> Result<(), CompileError> {
        self.expr()?;
        if !self.cur.kind.is_comparison() {
            return Err(self.error(ParseErrorKind::ExpectedComparison {
                found: self.cur.describe(),
            }));
        }
        while self.cur.kind.is_comparison() {
            let op = self.advance()?;
            self.out.emit(&codegen::binary(op.text));
            self.expr()?;
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<(), CompileError> {
        self.term()?;
        while self.cur.kind.is_additive() {
            let op = self.advance()?;
            self.out.emit(&codegen::binary(op.text));
            self.term()?;
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), CompileError> {
        self.unary()?;
        while self.cur.kind.is_multiplicative() {
            let op = self.advance()?;
            self.out.emit(&codegen::binary(op.text));
            self.unary()?;
        }
        Ok(())
    }

    fn unary(&mut self) -> Result<(), CompileError> {
        if self.cur.kind.is_additive() {
            let sign = self.advance()?;
            self.out.emit(sign.text);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<(), CompileError> {
        match self.cur.kind {
            TokenKind::Number => {}
            TokenKind::Ident => {
                if !self.vars.contains(self.cur.text) {
                    return Err(self.error(ParseErrorKind::UseBeforeAssignment {
                        name: self.cur.text.to_string(),
                    }));
                }
            }
            _ => {
                return Err(self.error(ParseErrorKind::ExpectedExpression {
                    found: self.cur.describe(),
                }));
            }
        }
        let operand = self.advance()?;
        self.out.emit(operand.text);
        Ok(())
    }

    /// One required newline, then any blank lines, each reproduced in the
    /// body.
    fn nl(&mut self) -> Result<(), CompileError> {
        self.expect(TokenKind::Newline)?;
        while self.check(TokenKind::Newline) {
            self.out.emit_line("");
            self.advance()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
