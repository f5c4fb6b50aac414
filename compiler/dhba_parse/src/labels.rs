//! Label bookkeeping for `LABEL` and `GOTO`.
//!
//! Declarations are checked for duplicates immediately. `GOTO` targets may
//! point forward, so they are only collected while parsing and compared with
//! the declarations by [`LabelTable::finalize`] at the end.

use dhba_ir::Span;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{ParseError, ParseErrorKind};

#[derive(Default, Debug)]
pub struct LabelTable<'a> {
    /// Label name to its declaration.
    declared: FxHashMap<&'a str, Span>,
    /// Jump target to its first `GOTO`.
    referenced: FxHashMap<&'a str, Span>,
}

impl<'a> LabelTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `LABEL`. A second declaration of the same name fails.
    pub fn declare(&mut self, name: &'a str, span: Span) -> Result<(), ParseError> {
        if let Some(&first) = self.declared.get(name) {
            return Err(ParseError::new(
                span,
                ParseErrorKind::DuplicateLabel {
                    name: name.to_string(),
                    first,
                },
            ));
        }
        debug!(label = name, "declared label");
        self.declared.insert(name, span);
        Ok(())
    }

    /// Record a `GOTO` target.
    pub fn reference(&mut self, name: &'a str, span: Span) {
        self.referenced.entry(name).or_insert(span);
    }

    /// Jump targets that were never declared, in source order.
    pub fn undeclared(&self) -> Vec<(&'a str, Span)> {
        let mut missing: Vec<_> = self
            .referenced
            .iter()
            .filter(|(name, _)| !self.declared.contains_key(*name))
            .map(|(&name, &span)| (name, span))
            .collect();
        missing.sort_by_key(|&(_, span)| span.start);
        missing
    }

    /// Fail on the first `GOTO` whose target was never declared.
    pub fn finalize(&self) -> Result<(), ParseError> {
        match self.undeclared().first() {
            Some(&(name, span)) => Err(ParseError::new(
                span,
                ParseErrorKind::UndeclaredLabel {
                    name: name.to_string(),
                },
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
