//! Single-pass compiler from dhemiaBASIC to Go.
//!
//! There is no syntax tree. The [`Parser`] pulls tokens from the scanner one
//! at a time, recognizes the grammar by recursive descent and writes Go text
//! into an [`EmitBuffer`](dhba_emit::EmitBuffer) as each construct is
//! recognized. Semantic checks (variables assigned before use, unique labels,
//! `GOTO` targets that exist) happen in the same pass; `GOTO` targets are
//! validated once the whole program has been read, so forward jumps work.
//!
//! The first error aborts the compilation and no artifact is produced.
//!
//! ```
//! let go = dhba_parse::compile("LET x = 2\nPRINT x * 3\n")?;
//! assert!(go.contains("\tvar x float64\n"));
//! assert!(go.contains("\tfmt.Println(x * 3)\n"));
//! # Ok::<(), dhba_parse::CompileError>(())
//! ```

mod codegen;
mod error;
mod labels;
mod parser;

pub use error::{CompileError, ParseError, ParseErrorKind};
pub use labels::LabelTable;
pub use parser::Parser;

use dhba_lexer::SourceBuffer;

/// Compile a complete program to Go source text.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn compile(source: &str) -> Result<String, CompileError> {
    let buf = SourceBuffer::new(source);
    Parser::new(&buf)?.program()
}
