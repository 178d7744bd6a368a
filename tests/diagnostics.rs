//! Rendering of lexical diagnostics against real lexer output.

mod common;

use common::lex;
use pretty_assertions::assert_eq;
use vsharp::{DiagnosticKind, Span};

#[test]
fn illegal_character_report() {
    let lexed = vsharp::tokenize("var x = 1;\nvar y = @;\n", "src/main.vs");
    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(
        lexed.diagnostics[0].to_string(),
        "\
error: Illegal character
 --> src/main.vs:2:9
2 | var y = @;
  |         ^"
    );
}

#[test]
fn unterminated_string_points_at_last_character() {
    let lexed = lex("s = \"abc");
    let diag = &lexed.diagnostics[0];
    assert_eq!(diag.kind, DiagnosticKind::UnterminatedString);
    assert_eq!(diag.span, Span { line: 1, column: 8 });
    assert_eq!(diag.line_text(), "s = \"abc");
}

#[test]
fn multiline_string_reports_on_closing_line() {
    let lexed = lex("x = \"first\nsecond\\z\"");
    let diag = &lexed.diagnostics[0];
    assert_eq!(diag.kind, DiagnosticKind::InvalidEscape('z'));
    assert_eq!(diag.span, Span { line: 2, column: 8 });
    assert_eq!(
        diag.to_string(),
        "\
error: invalid escape character: \\z
 --> test.vs:2:8
2 | second\\z\"
  |        ^"
    );
}

#[test]
fn double_digit_line_numbers_widen_gutter() {
    let input = format!("{}'xy'", "\n".repeat(9));
    let lexed = lex(&input);
    let rendered = lexed.diagnostics[0].to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        vec![
            "error: extra characters in character literal (expected closing ')",
            "  --> test.vs:10:3",
            "10 | 'xy'",
            "   |   ^",
        ]
    );
}

#[test]
fn diagnostics_are_ordered_by_detection() {
    let lexed = lex("@ \"\" '' #");
    let kinds: Vec<_> = lexed.diagnostics.iter().map(|d| d.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::IllegalCharacter,
            DiagnosticKind::EmptyString,
            DiagnosticKind::EmptyChar,
            DiagnosticKind::IllegalCharacter,
        ]
    );
}

#[test]
fn tokens_render_their_own_line() {
    let lexed = lex("a\n  bc d\ne");
    let token = &lexed.tokens[2];
    assert_eq!(token.lexeme, "d");
    assert_eq!(token.line_text(), "  bc d");
}

#[test]
fn clean_input_has_no_diagnostics() {
    let lexed = lex("define f(int32 a) int32 { return a * 2 % 3; }");
    assert!(lexed.diagnostics.is_empty());
}
