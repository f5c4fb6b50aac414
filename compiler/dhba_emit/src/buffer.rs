//! Append-only, indentation-aware text accumulator.
//!
//! The buffer has three regions that grow independently:
//!
//! - **header**: the package clause, imports and the opening of `main`
//! - **declarations**: one `var` line per variable, in first-use order
//! - **body**: the translated statements
//!
//! Declarations are discovered while the body is being written, so they live
//! in their own region and are spliced between header and body by
//! [`EmitBuffer::finish`]. One indentation level is one tab.

use tracing::debug;

const INDENT: char = '\t';

#[derive(Default, Debug)]
pub struct EmitBuffer {
    header: String,
    decls: String,
    body: String,
    depth: usize,
}

impl EmitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw text to the body.
    pub fn emit(&mut self, text: &str) {
        self.body.push_str(text);
    }

    /// Append text to the body after the current indentation.
    pub fn emit_indented(&mut self, text: &str) {
        push_indent(&mut self.body, self.depth);
        self.body.push_str(text);
    }

    /// Append `text` and a newline to the body, without indentation.
    pub fn emit_line(&mut self, text: &str) {
        self.body.push_str(text);
        self.body.push('\n');
    }

    /// Append an indented line to the body.
    pub fn emit_line_indented(&mut self, text: &str) {
        self.emit_indented(text);
        self.body.push('\n');
    }

    /// Append a line to the header region at the current depth.
    pub fn header_line(&mut self, text: &str) {
        push_indent(&mut self.header, self.depth);
        self.header.push_str(text);
        self.header.push('\n');
    }

    /// Append a line to the declarations region.
    ///
    /// Declarations sit directly inside `main`, so they get exactly one level
    /// of indentation whenever any is active, however deep the body is.
    pub fn decl_line(&mut self, text: &str) {
        push_indent(&mut self.decls, self.depth.min(1));
        self.decls.push_str(text);
        self.decls.push('\n');
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease indentation. Saturates at zero.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Concatenate the regions into the final artifact.
    ///
    /// A non-empty declarations region is followed by one blank line.
    pub fn finish(self) -> String {
        let EmitBuffer {
            header,
            decls,
            body,
            ..
        } = self;

        debug!(
            header = header.len(),
            decls = decls.len(),
            body = body.len(),
            "finishing artifact"
        );

        let mut out = String::with_capacity(header.len() + decls.len() + body.len() + 1);
        out.push_str(&header);
        if !decls.is_empty() {
            out.push_str(&decls);
            out.push('\n');
        }
        out.push_str(&body);
        out
    }
}

fn push_indent(buf: &mut String, depth: usize) {
    for _ in 0..depth {
        buf.push(INDENT);
    }
}
