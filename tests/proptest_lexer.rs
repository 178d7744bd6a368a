//! Property-based tests with proptest.
//!
//! Feed arbitrary text (biased towards the characters the lexer cares
//! about) through `tokenize` and check the structural guarantees: the
//! pass terminates with a single trailing `EndOfFile`, positions never
//! go backwards, and every token's lexeme sits verbatim at its reported
//! position with only whitespace between tokens.

use proptest::prelude::*;
use vsharp::{TokenKind, tokenize};

/// Source made of lexically interesting fragments.
fn source() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        "[a-z_$][a-z0-9_']{0,6}",
        "[0-9][0-9_.]{0,6}",
        Just("\"".to_string()),
        Just("'".to_string()),
        Just("\\".to_string()),
        Just("//".to_string()),
        "[ \t\r\n]{1,3}",
        "[-+*/%=!<>&|:;,.(){}\\[\\]@#^~]",
        "\\PC",
        Just("\u{FEFF}".to_string()),
    ];
    prop::collection::vec(fragment, 0..40).prop_map(|parts| parts.concat())
}

/// Char offset of every line start.
fn line_starts(chars: &[char]) -> Vec<usize> {
    std::iter::once(0)
        .chain(
            chars
                .iter()
                .enumerate()
                .filter(|(_, c)| **c == '\n')
                .map(|(i, _)| i + 1),
        )
        .collect()
}

const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

proptest! {
    #[test]
    fn ends_with_single_eof(input in source()) {
        let lexed = tokenize(&input, "prop.vs");
        let last = lexed.tokens.last().expect("at least one token");
        prop_assert_eq!(last.kind, TokenKind::EndOfFile);
        prop_assert_eq!(&last.lexeme, "");
        let eofs = lexed
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::EndOfFile)
            .count();
        prop_assert_eq!(eofs, 1);
    }

    #[test]
    fn positions_are_monotonic(input in source()) {
        let lexed = tokenize(&input, "prop.vs");
        for pair in lexed.tokens.windows(2) {
            prop_assert!(pair[0].span <= pair[1].span);
        }
        for token in &lexed.tokens {
            prop_assert!(token.span.line >= 1 && token.span.column >= 1);
        }
    }

    #[test]
    fn lexemes_reconstruct_source(input in source()) {
        let chars: Vec<char> = input.chars().collect();
        let starts = line_starts(&chars);
        let lexed = tokenize(&input, "prop.vs");

        let mut cursor = 0;
        for token in &lexed.tokens {
            let offset = starts[token.span.line - 1] + token.span.column - 1;
            prop_assert!(offset >= cursor);
            prop_assert!(chars[cursor..offset].iter().all(|&c| is_space(c)));

            let len = token.lexeme.chars().count();
            let text: String = chars[offset..offset + len].iter().collect();
            prop_assert_eq!(&text, &token.lexeme);
            cursor = offset + len;
        }
        prop_assert_eq!(cursor, chars.len());
    }

    #[test]
    fn every_illegal_token_is_reported(input in source()) {
        let lexed = tokenize(&input, "prop.vs");
        let illegal = lexed
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Illegal)
            .count();
        let reported = lexed
            .diagnostics
            .iter()
            .filter(|d| d.kind == vsharp::DiagnosticKind::IllegalCharacter)
            .count();
        prop_assert_eq!(illegal, reported);
    }

    #[test]
    fn diagnostics_render_four_lines(input in source()) {
        let lexed = tokenize(&input, "prop.vs");
        for diag in &lexed.diagnostics {
            let rendered = diag.to_string();
            prop_assert_eq!(rendered.split('\n').count(), 4);
            prop_assert!(rendered.starts_with("error: "));
        }
    }
}
