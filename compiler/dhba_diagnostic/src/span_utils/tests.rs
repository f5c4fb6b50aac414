use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_line_from_offset_multiple_lines() {
    let table = LineOffsetTable::build("line1\nline2\nline3");
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(5), 1); // '\n' after line1
    assert_eq!(table.line_from_offset(6), 2);
    assert_eq!(table.line_from_offset(11), 2);
    assert_eq!(table.line_from_offset(12), 3);
}

#[test]
fn test_offset_to_line_col() {
    let source = "abc\ndefgh\nij";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 2), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 4), (2, 1));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 4));
    assert_eq!(table.offset_to_line_col(source, 10), (3, 1));
}

#[test]
fn test_offset_to_line_col_empty_source() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.offset_to_line_col("", 0), (1, 1));
    assert_eq!(table.offsets, vec![0]);
}

#[test]
fn test_offset_past_end_clamps() {
    // The scanner appends a newline, so errors can point one past the text.
    let source = "PRINT \"x";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 8), (1, 9));
    assert_eq!(table.offset_to_line_col(source, 40), (1, 9));
}

#[test]
fn test_columns_count_characters() {
    let source = "PRINT \"héllo\" ?";
    let table = LineOffsetTable::build(source);
    // 'é' is two bytes; '?' sits at byte 15 but column 15.
    assert_eq!(table.offset_to_line_col(source, 15), (1, 15));
}

#[test]
fn test_line_text_strips_terminators() {
    let source = "LET a = 1\r\nPRINT a\nGOTO end";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_text(source, 1), "LET a = 1");
    assert_eq!(table.line_text(source, 2), "PRINT a");
    assert_eq!(table.line_text(source, 3), "GOTO end");
    assert_eq!(table.line_text(source, 9), "LET a = 1");
}
