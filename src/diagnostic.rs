use std::fmt;
use std::sync::Arc;

use crate::token::Span;

/// Classifies a lexical diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Character that cannot start any token.
    IllegalCharacter,
    /// Input ended before the closing `"`.
    UnterminatedString,
    /// `""` is rejected.
    EmptyString,
    /// Input ended right after a `\` inside a string.
    UnterminatedStringEscape,
    /// Backslash followed by a character outside `n t r \ ' " 0`.
    InvalidEscape(char),
    /// Input ended before the closing `'`.
    UnterminatedChar,
    /// `''` is rejected.
    EmptyChar,
    /// Input ended right after a `\` inside a character literal.
    UnterminatedCharEscape,
    /// More than one unit before the closing `'`.
    ExtraCharacters,
    /// Payload was not exactly one character or escape.
    CharLiteralArity,
    /// Digits, separators and dots that do not form a number.
    MalformedNumber,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalCharacter => write!(f, "Illegal character"),
            Self::UnterminatedString => write!(f, "unterminated string literal"),
            Self::EmptyString => write!(f, "empty string literal"),
            Self::UnterminatedStringEscape => {
                write!(f, "unterminated escape sequence in string literal")
            }
            Self::InvalidEscape(ch) => write!(f, "invalid escape character: \\{ch}"),
            Self::UnterminatedChar => write!(f, "unterminated character literal"),
            Self::EmptyChar => write!(f, "empty character literal"),
            Self::UnterminatedCharEscape => {
                write!(f, "unterminated escape sequence in character literal")
            }
            Self::ExtraCharacters => {
                write!(
                    f,
                    "extra characters in character literal \
                     (expected closing ')"
                )
            }
            Self::CharLiteralArity => {
                write!(
                    f,
                    "character literal must contain exactly 1 character \
                     or valid escape"
                )
            }
            Self::MalformedNumber => write!(f, "malformed numeric literal"),
        }
    }
}

/// A lexical error pinned to a source location.
///
/// Carries shared views of the file name and source text, so it renders
/// the offending line without going back to disk. `Display` produces:
///
/// ```text
/// error: Illegal character
///  --> main.vs:1:3
/// 1 | x @ y
///   |   ^
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub file: Arc<str>,
    pub source: Arc<str>,
}

impl Diagnostic {
    /// Text of the source line the diagnostic points at.
    #[must_use]
    pub fn line_text(&self) -> &str {
        line_text(&self.source, self.span.line)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Span { line, column } = self.span;
        let gutter = line.to_string();
        let width = gutter.len();
        // Clamp so a zero column still puts the caret in the first cell.
        let pad = column.max(1) - 1;

        writeln!(f, "error: {}", self.kind)?;
        writeln!(f, "{:width$}--> {}:{line}:{column}", "", self.file)?;
        writeln!(f, "{gutter} | {}", self.line_text())?;
        write!(f, "{:width$} | {:pad$}^", "", "")
    }
}

/// Return the text of a 1-based `line` within `source`, without its
/// line terminator. Line 0 or a line past the end yields `""`.
/// A trailing `\r` is dropped, so CRLF lines echo without it.
///
/// Walks the buffer from the start on every call.
#[must_use]
pub fn line_text(source: &str, line: usize) -> &str {
    let Some(index) = line.checked_sub(1) else {
        return "";
    };
    let text = source.split('\n').nth(index).unwrap_or("");
    text.strip_suffix('\r').unwrap_or(text)
}
