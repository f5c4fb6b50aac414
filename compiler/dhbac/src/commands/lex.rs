//! The `lex` command: print the token stream.

use std::fmt::Write;

use dhba_lexer::{tokenize, LexError, SourceBuffer};
use dhba_parse::CompileError;

use super::{read_input, report, BuildOptions, Outcome};

/// One line per token: kind, text and span.
pub fn token_listing(source: &str) -> Result<String, LexError> {
    let buf = SourceBuffer::new(source);
    let mut out = String::new();
    for token in tokenize(&buf)? {
        let _ = writeln!(out, "{:?} {:?} @ {}", token.kind, token.text, token.span);
    }
    Ok(out)
}

pub fn lex_file(options: &BuildOptions) -> Outcome {
    let input = match read_input(&options.input) {
        Ok(input) => input,
        Err(err) => {
            report(err, None, options.color);
            return Outcome::Failure;
        }
    };

    match token_listing(&input.text) {
        Ok(listing) => {
            println!("Tokens for '{}' ({} tokens):", input.name, listing.lines().count());
            for line in listing.lines() {
                println!("  {line}");
            }
            Outcome::Success
        }
        Err(err) => {
            report(CompileError::from(err).into(), Some(&input), options.color);
            Outcome::Failure
        }
    }
}
