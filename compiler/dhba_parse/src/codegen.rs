//! Go text for each construct.

/// Lines written to the header region before any statement.
pub(crate) const PREAMBLE: [&str; 5] = [
    "package main",
    "",
    "import \"fmt\"",
    "",
    "func main() {",
];

pub(crate) const BLOCK_OPEN: &str = " {";
pub(crate) const BLOCK_CLOSE: &str = "}";

pub(crate) const IF: &str = "if ";
pub(crate) const FOR: &str = "for ";

pub(crate) const PRINTLN_OPEN: &str = "fmt.Println(";
pub(crate) const PRINTLN_CLOSE: &str = ")";

pub(crate) fn declaration(name: &str) -> String {
    format!("var {name} float64")
}

pub(crate) fn println_string(text: &str) -> String {
    format!("fmt.Println(\"{text}\")")
}

pub(crate) fn label(name: &str) -> String {
    format!("{name}:")
}

pub(crate) fn goto(name: &str) -> String {
    format!("goto {name}")
}

pub(crate) fn assign(name: &str) -> String {
    format!("{name} = ")
}

pub(crate) fn scan(name: &str) -> String {
    format!("fmt.Scan(&{name})")
}

/// A binary operator with one space on each side.
pub(crate) fn binary(op: &str) -> String {
    format!(" {op} ")
}
