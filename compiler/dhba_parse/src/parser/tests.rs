#![allow(clippy::unwrap_used)]

use super::*;
use dhba_ir::Span;
use pretty_assertions::assert_eq;

const HEADER: &str = "package main\n\nimport \"fmt\"\n\nfunc main() {\n";

fn compile(source: &str) -> Result<String, CompileError> {
    let buf = SourceBuffer::new(source);
    Parser::new(&buf)?.program()
}

/// Output with the fixed header stripped.
fn rest(source: &str) -> String {
    let out = compile(source).unwrap();
    out.strip_prefix(HEADER).unwrap().to_string()
}

fn parse_error(source: &str) -> ParseError {
    match compile(source).unwrap_err() {
        CompileError::Parse(err) => err,
        CompileError::Lex(err) => panic!("expected a parse error, got {err:?}"),
    }
}

// === Token window ===

#[test]
fn new_reads_two_tokens() {
    let buf = SourceBuffer::new("PRINT 1");
    let parser = Parser::new(&buf).unwrap();
    assert_eq!(parser.cur.kind, TokenKind::Print);
    assert_eq!(parser.peek.kind, TokenKind::Number);
    assert_eq!(parser.peek.text, "1");
}

#[test]
fn advance_shifts_the_window() {
    let buf = SourceBuffer::new("GOTO a");
    let mut parser = Parser::new(&buf).unwrap();
    let prev = parser.advance().unwrap();
    assert_eq!(prev.kind, TokenKind::Goto);
    assert_eq!(parser.cur.kind, TokenKind::Ident);
    assert_eq!(parser.peek.kind, TokenKind::Newline);
}

#[test]
fn lookahead_lex_error_surfaces_early() {
    let buf = SourceBuffer::new("PRINT $");
    assert!(matches!(Parser::new(&buf), Err(CompileError::Lex(_))));
}

// === Program shape ===

#[test]
fn empty_program() {
    assert_eq!(compile("").unwrap(), format!("{HEADER}}}\n"));
}

#[test]
fn leading_blank_lines_and_comments_are_skipped() {
    assert_eq!(rest("\n\n// intro\n\nPRINT 1"), "\tfmt.Println(1)\n}\n");
}

#[test]
fn blank_lines_between_statements_are_kept() {
    assert_eq!(
        rest("PRINT 1\n\n\nPRINT 2"),
        "\tfmt.Println(1)\n\n\n\tfmt.Println(2)\n}\n"
    );
}

#[test]
fn trailing_newline_becomes_one_blank_line() {
    assert_eq!(rest("PRINT 1\n"), "\tfmt.Println(1)\n\n}\n");
}

// === Statements ===

#[test]
fn print_string_and_expression() {
    assert_eq!(
        rest("PRINT \"hello, world!\"\nPRINT 2 * 3"),
        "\tfmt.Println(\"hello, world!\")\n\tfmt.Println(2 * 3)\n}\n"
    );
}

#[test]
fn let_and_var_assign() {
    assert_eq!(
        rest("LET a = 1\nvar b = a"),
        "\tvar a float64\n\tvar b float64\n\n\ta = 1\n\tb = a\n}\n"
    );
}

#[test]
fn reassignment_declares_once() {
    assert_eq!(
        rest("LET a = 1\nLET a = a + 1"),
        "\tvar a float64\n\n\ta = 1\n\ta = a + 1\n}\n"
    );
}

#[test]
fn target_is_assigned_inside_its_own_expression() {
    assert_eq!(rest("LET a = a"), "\tvar a float64\n\n\ta = a\n}\n");
}

#[test]
fn input_declares_and_scans() {
    assert_eq!(
        rest("INPUT x\nPRINT x"),
        "\tvar x float64\n\n\tfmt.Scan(&x)\n\tfmt.Println(x)\n}\n"
    );
}

#[test]
fn label_and_goto() {
    assert_eq!(
        rest("LABEL top\nGOTO top"),
        "\ttop:\n\tgoto top\n}\n"
    );
}

#[test]
fn if_block() {
    assert_eq!(
        rest("LET n = 5\nIF n >= 3 THEN\nPRINT \"big\"\nENDIF"),
        "\tvar n float64\n\n\tn = 5\n\tif n >= 3 {\n\t\tfmt.Println(\"big\")\n\t}\n}\n"
    );
}

#[test]
fn while_block() {
    assert_eq!(
        rest("LET i = 0\nWHILE i != 3 REPEAT\nLET i = i + 1\nENDWHILE"),
        "\tvar i float64\n\n\ti = 0\n\tfor i != 3 {\n\t\ti = i + 1\n\t}\n}\n"
    );
}

#[test]
fn blank_line_after_block_opener_follows_the_brace() {
    assert_eq!(
        rest("IF 1 < 2 THEN\n\nPRINT 1\nENDIF"),
        "\tif 1 < 2 {\n\n\t\tfmt.Println(1)\n\t}\n}\n"
    );
}

#[test]
fn empty_block() {
    assert_eq!(rest("WHILE 1 == 1 REPEAT\nENDWHILE"), "\tfor 1 == 1 {\n\t}\n}\n");
}

#[test]
fn nested_blocks_indent_by_tabs() {
    let source = "LET i = 0\nWHILE i < 3 REPEAT\nIF i == 1 THEN\nPRINT i\nENDIF\nLET i = i + 1\nENDWHILE";
    assert_eq!(
        rest(source),
        "\tvar i float64\n\n\ti = 0\n\tfor i < 3 {\n\t\tif i == 1 {\n\t\t\tfmt.Println(i)\n\t\t}\n\t\ti = i + 1\n\t}\n}\n"
    );
}

#[test]
fn declarations_inside_blocks_stay_at_one_level() {
    assert_eq!(
        rest("IF 1 < 2 THEN\nIF 2 < 3 THEN\nLET deep = 1\nENDIF\nENDIF"),
        "\tvar deep float64\n\n\tif 1 < 2 {\n\t\tif 2 < 3 {\n\t\t\tdeep = 1\n\t\t}\n\t}\n}\n"
    );
}

// === Expressions ===

#[test]
fn unary_sign_is_attached() {
    assert_eq!(
        rest("LET a = -1\nLET b = a * -a / +2"),
        "\tvar a float64\n\tvar b float64\n\n\ta = -1\n\tb = a * -a / +2\n}\n"
    );
}

#[test]
fn operators_keep_source_spelling() {
    assert_eq!(rest("PRINT 1.50 - 2+3"), "\tfmt.Println(1.50 - 2 + 3)\n}\n");
}

#[test]
fn chained_comparisons_are_spaced() {
    assert_eq!(
        rest("IF 1 < 2 <= 3 THEN\nENDIF"),
        "\tif 1 < 2 <= 3 {\n\t}\n}\n"
    );
}

// === Errors ===

#[test]
fn missing_comparison_operator() {
    let err = parse_error("IF 1 THEN\nENDIF");
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedComparison {
            found: "`THEN`".to_string()
        }
    );
    assert_eq!(err.span, Span::new(5, 9));
}

#[test]
fn variable_used_before_assignment() {
    let err = parse_error("PRINT x\nLET x = 1");
    assert_eq!(
        err.kind,
        ParseErrorKind::UseBeforeAssignment {
            name: "x".to_string()
        }
    );
    assert_eq!(err.span, Span::new(6, 7));
}

#[test]
fn variable_names_are_case_sensitive() {
    let err = parse_error("LET a = 1\nPRINT A");
    assert!(matches!(err.kind, ParseErrorKind::UseBeforeAssignment { .. }));
}

#[test]
fn duplicate_label_fails_at_second_declaration() {
    let err = parse_error("LABEL a\nLABEL a");
    assert_eq!(err.span, Span::new(14, 15));
    assert_eq!(
        err.kind,
        ParseErrorKind::DuplicateLabel {
            name: "a".to_string(),
            first: Span::new(6, 7),
        }
    );
}

#[test]
fn goto_to_undeclared_label() {
    let err = parse_error("PRINT 1\nGOTO nowhere");
    assert_eq!(err.span, Span::new(13, 20));
    assert_eq!(
        err.kind,
        ParseErrorKind::UndeclaredLabel {
            name: "nowhere".to_string()
        }
    );
}

#[test]
fn earlier_errors_win_over_label_check() {
    let err = parse_error("GOTO nowhere\nPRINT y");
    assert!(matches!(err.kind, ParseErrorKind::UseBeforeAssignment { .. }));
}

#[test]
fn statement_cannot_start_with_then() {
    let err = parse_error("THEN");
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidStatement {
            found: "`THEN`".to_string()
        }
    );
}

#[test]
fn expression_cannot_start_with_string() {
    let err = parse_error("LET a = \"s\"");
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedExpression {
            found: "string \"s\"".to_string()
        }
    );
}

#[test]
fn print_needs_an_operand() {
    let err = parse_error("PRINT");
    assert_eq!(
        err.kind,
        ParseErrorKind::ExpectedExpression {
            found: "newline".to_string()
        }
    );
}

#[test]
fn assignment_needs_equals() {
    let err = parse_error("LET a 1");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Eq,
            found: "number `1`".to_string(),
        }
    );
}

#[test]
fn keyword_is_not_a_label_name() {
    let err = parse_error("LABEL print");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Ident,
            found: "`PRINT`".to_string(),
        }
    );
}

#[test]
fn statements_need_their_own_line() {
    let err = parse_error("PRINT 1 PRINT 2");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Newline,
            found: "`PRINT`".to_string(),
        }
    );
}

#[test]
fn block_opener_needs_newline() {
    let err = parse_error("IF 1 < 2 THEN PRINT 1\nENDIF");
    assert!(matches!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Newline,
            ..
        }
    ));
}

#[test]
fn unclosed_block_reports_missing_terminator() {
    let err = parse_error("WHILE 1 < 2 REPEAT\nPRINT 1");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::EndWhile,
            found: "end of input".to_string(),
        }
    );
}

#[test]
fn mismatched_terminator() {
    let err = parse_error("IF 1 < 2 THEN\nENDWHILE");
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidStatement {
            found: "`ENDWHILE`".to_string()
        }
    );
}

#[test]
fn lex_errors_pass_through() {
    let err = compile("LET a = 12.").unwrap_err();
    assert!(matches!(err, CompileError::Lex(_)));
    assert_eq!(err.code(), dhba_diagnostic::ErrorCode::E0003);
}

// === Depth ===

#[test]
fn deeply_nested_blocks_compile() {
    let depth = 5_000;
    let mut source = String::new();
    for _ in 0..depth {
        source.push_str("IF 1 < 2 THEN\n");
    }
    source.push_str("PRINT 1\n");
    for _ in 0..depth {
        source.push_str("ENDIF\n");
    }
    let out = compile(&source).unwrap();
    assert_eq!(out.matches("if 1 < 2 {").count(), depth);
    let innermost = format!("{}fmt.Println(1)\n", "\t".repeat(depth + 1));
    assert!(out.contains(&innermost));
}
