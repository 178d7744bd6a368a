use std::sync::Arc;

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::token::{Span, Token, TokenKind};

/// Output of a full tokenize pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    /// Every token in source order, ending with exactly one `EndOfFile`.
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were detected.
    pub diagnostics: Vec<Diagnostic>,
}

impl Lexed {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Tokens with comments filtered out.
    pub fn without_comments(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.kind != TokenKind::Comment)
    }
}

/// Tokenize VSharp source text.
///
/// Never fails: malformed input becomes `Illegal` tokens or literal
/// tokens paired with diagnostics. `file` is only used for display.
#[must_use]
pub fn tokenize(source: &str, file: &str) -> Lexed {
    Lexer::new(source, file).tokenize()
}

/// Cursor over the decoded source of one file.
///
/// Single use: drive it with [`Lexer::next_token`] until `EndOfFile`,
/// or hand it to [`Lexer::tokenize`].
#[derive(Debug)]
pub struct Lexer {
    chars: Vec<char>,
    source: Arc<str>,
    file: Arc<str>,
    pos: usize,
    line: usize,
    col: usize,
    /// Location of the most recently consumed code point.
    last: Span,
    diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    #[must_use]
    pub fn new(source: impl Into<Arc<str>>, file: impl Into<Arc<str>>) -> Self {
        let source = source.into();
        let chars: Vec<char> = source.chars().collect();
        Self {
            chars,
            source,
            file: file.into(),
            pos: 0,
            line: 1,
            col: 1,
            last: Span { line: 1, column: 1 },
            diagnostics: Vec::new(),
        }
    }

    /// Drive the lexer to completion. The returned tokens always end
    /// with a single `EndOfFile`.
    #[must_use]
    pub fn tokenize(mut self) -> Lexed {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::EndOfFile;
            tokens.push(token);
            if done {
                break;
            }
        }

        tracing::debug!(
            file = %self.file,
            tokens = tokens.len(),
            diagnostics = self.diagnostics.len(),
            "tokenized"
        );

        Lexed {
            tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Diagnostics recorded so far.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Scan one token. Past the end of input this keeps returning
    /// `EndOfFile`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.span();
        let begin = self.pos;

        let Some(ch) = self.peek() else {
            return self.make_token(TokenKind::EndOfFile, begin, start);
        };

        let kind = match ch {
            c if is_identifier_start(c) => {
                self.read_identifier();
                TokenKind::lookup_identifier(&self.slice(begin))
            }
            c if is_digit(c) => self.read_number(begin),
            '"' => {
                self.read_string();
                TokenKind::String
            }
            '\'' => {
                self.read_char();
                TokenKind::Byte
            }
            '/' if self.peek_at(1) == Some('/') => {
                self.read_comment();
                TokenKind::Comment
            }
            _ => self.read_operator(),
        };

        if kind == TokenKind::Illegal {
            self.report(DiagnosticKind::IllegalCharacter);
        }

        self.make_token(kind, begin, start)
    }

    const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }

    fn make_token(&self, kind: TokenKind, begin: usize, span: Span) -> Token {
        Token {
            kind,
            lexeme: self.slice(begin),
            span,
            file: Arc::clone(&self.file),
            source: Arc::clone(&self.source),
        }
    }

    fn slice(&self, begin: usize) -> String {
        self.chars[begin..self.pos].iter().collect()
    }

    fn report(&mut self, kind: DiagnosticKind) {
        tracing::trace!(%kind, line = self.last.line, column = self.last.column, "diagnostic");
        self.diagnostics.push(Diagnostic {
            kind,
            span: self.last,
            file: Arc::clone(&self.file),
            source: Arc::clone(&self.source),
        });
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.last = self.span();
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    /// Consume `next` if it is the upcoming code point.
    fn eat(&mut self, next: char) -> bool {
        if self.peek() == Some(next) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.advance();
        }
    }

    fn read_identifier(&mut self) {
        while self.peek().is_some_and(is_identifier_part) {
            self.advance();
        }
    }

    fn read_number(&mut self, begin: usize) -> TokenKind {
        let mut has_point = false;
        while let Some(ch) = self.peek() {
            match ch {
                // `1..5` leaves both dots for the punctuation scanner.
                '.' if self.peek_at(1) == Some('.') => break,
                '.' => has_point = true,
                c if is_digit(c) || c == '_' => {}
                _ => break,
            }
            self.advance();
        }

        let numeral: String = self.chars[begin..self.pos]
            .iter()
            .filter(|&&c| c != '_')
            .collect();
        let is_float = numeral.parse::<f64>().is_ok();

        if has_point {
            if is_float {
                return TokenKind::Float;
            }
        } else if numeral.parse::<i64>().is_ok() {
            return TokenKind::Integer;
        } else if is_float {
            return TokenKind::Float;
        }

        self.report(DiagnosticKind::MalformedNumber);
        TokenKind::Illegal
    }

    /// Consume the character after a `\`. Returns false once a
    /// diagnostic has been recorded.
    fn read_escape(&mut self, unterminated: DiagnosticKind) -> bool {
        match self.advance() {
            None => {
                self.report(unterminated);
                false
            }
            Some('n' | 't' | 'r' | '\\' | '\'' | '"' | '0') => true,
            Some(other) => {
                self.report(DiagnosticKind::InvalidEscape(other));
                false
            }
        }
    }

    fn read_string(&mut self) {
        self.advance(); // opening quote

        let mut ch = match self.advance() {
            None => return self.report(DiagnosticKind::UnterminatedString),
            Some('"') => return self.report(DiagnosticKind::EmptyString),
            Some(c) => c,
        };

        loop {
            if ch == '\\' && !self.read_escape(DiagnosticKind::UnterminatedStringEscape) {
                return;
            }
            match self.advance() {
                None => return self.report(DiagnosticKind::UnterminatedString),
                Some('"') => return,
                Some(c) => ch = c,
            }
        }
    }

    fn read_char(&mut self) {
        self.advance(); // opening quote

        let units = match self.advance() {
            None => return self.report(DiagnosticKind::UnterminatedChar),
            Some('\'') => return self.report(DiagnosticKind::EmptyChar),
            Some('\\') => {
                if !self.read_escape(DiagnosticKind::UnterminatedCharEscape) {
                    return;
                }
                1
            }
            Some(_) => 1,
        };

        match self.advance() {
            None => return self.report(DiagnosticKind::UnterminatedChar),
            Some('\'') => {}
            Some(_) => return self.report(DiagnosticKind::ExtraCharacters),
        }

        // Only one unit is ever read above, so this cannot fire today.
        if units != 1 {
            self.report(DiagnosticKind::CharLiteralArity);
        }
    }

    fn read_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    fn read_operator(&mut self) -> TokenKind {
        let Some(ch) = self.advance() else {
            return TokenKind::EndOfFile;
        };

        match ch {
            '=' if self.eat('=') => TokenKind::Equal,
            '=' => TokenKind::Assign,
            '!' if self.eat('=') => TokenKind::NotEqual,
            '!' => TokenKind::Not,
            '<' if self.eat('=') => TokenKind::LessEqual,
            '<' => TokenKind::LessThan,
            '>' if self.eat('=') => TokenKind::GreaterEqual,
            '>' => TokenKind::GreaterThan,
            '&' if self.eat('&') => TokenKind::And,
            '|' if self.eat('|') => TokenKind::Or,
            '|' => TokenKind::Vbar,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            ':' => TokenKind::Colon,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '.' => TokenKind::Dot,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            // A lone `&` falls through here.
            _ => TokenKind::Illegal,
        }
    }
}

/// Unicode letter (general category L).
fn is_letter(ch: char) -> bool {
    ch.general_category_group() == GeneralCategoryGroup::Letter
}

/// Unicode decimal digit (general category Nd).
fn is_digit(ch: char) -> bool {
    ch.general_category() == GeneralCategory::DecimalNumber
}

fn is_identifier_start(ch: char) -> bool {
    is_letter(ch) || ch == '_' || ch == '$'
}

fn is_identifier_part(ch: char) -> bool {
    is_letter(ch) || is_digit(ch) || ch == '_' || ch == '$' || ch == '\''
}
