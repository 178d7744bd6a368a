#![allow(dead_code)]

use vsharp::{Lexed, TokenKind, tokenize};

pub fn lex(input: &str) -> Lexed {
    tokenize(input, "test.vs")
}

pub fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input).tokens.iter().map(|t| t.kind).collect()
}

/// `(kind, lexeme, line, column)` for every token.
pub fn summary(input: &str) -> Vec<(TokenKind, String, usize, usize)> {
    lex(input)
        .tokens
        .into_iter()
        .map(|t| (t.kind, t.lexeme, t.span.line, t.span.column))
        .collect()
}

pub fn messages(input: &str) -> Vec<String> {
    lex(input)
        .diagnostics
        .iter()
        .map(|d| d.kind.to_string())
        .collect()
}
