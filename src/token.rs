use std::fmt;
use std::sync::Arc;

/// Source location for error reporting.
///
/// Both fields are 1-based; columns count code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Token kinds produced by the lexer.
///
/// The discriminant is the kind's ordinal, used by the token rendering
/// `<ordinal>('<lexeme>') at <line>:<column>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Literals.
    Identifier,
    Integer,
    Float,
    String,
    /// Character literal (`'a'`, `'\n'`).
    Byte,
    /// `true` or `false`.
    Boolean,

    // Arithmetic.
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,

    // Delimiters.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    /// `|`
    Vbar,

    // Assignment and comparison.
    Assign,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessEqual,
    GreaterEqual,

    // Logical.
    Not,
    And,
    Or,

    // Declaration and control keywords.
    KwPublic,
    KwPrivate,
    KwVirtual,
    KwOverride,
    KwStatic,
    KwConst,
    KwVar,
    KwIf,
    KwElse,
    KwMatch,
    KwFor,
    KwReturn,
    KwStructure,
    KwEnumeration,
    KwDefine,
    KwTypedef,
    KwClass,

    // Primitive type keywords.
    KwInt8,
    KwInt16,
    KwInt32,
    KwInt64,
    KwUInt8,
    KwUInt16,
    KwUInt32,
    KwUInt64,
    KwFloat32,
    KwFloat64,
    KwBoolean,
    KwString,
    KwByte,
    KwVoid,

    /// Line comment (`// ...`). Emitted, never discarded by the lexer.
    Comment,
    /// Input that cannot start any token.
    Illegal,
    EndOfFile,
}

/// Reserved words and the kinds they resolve to.
pub const KEYWORDS: [(&str, TokenKind); 33] = [
    ("public", TokenKind::KwPublic),
    ("private", TokenKind::KwPrivate),
    ("virtual", TokenKind::KwVirtual),
    ("override", TokenKind::KwOverride),
    ("static", TokenKind::KwStatic),
    ("const", TokenKind::KwConst),
    ("var", TokenKind::KwVar),
    ("if", TokenKind::KwIf),
    ("else", TokenKind::KwElse),
    ("match", TokenKind::KwMatch),
    ("for", TokenKind::KwFor),
    ("return", TokenKind::KwReturn),
    ("structure", TokenKind::KwStructure),
    ("enumeration", TokenKind::KwEnumeration),
    ("define", TokenKind::KwDefine),
    ("typedef", TokenKind::KwTypedef),
    ("class", TokenKind::KwClass),
    ("true", TokenKind::Boolean),
    ("false", TokenKind::Boolean),
    ("int8", TokenKind::KwInt8),
    ("int16", TokenKind::KwInt16),
    ("int32", TokenKind::KwInt32),
    ("int64", TokenKind::KwInt64),
    ("uint8", TokenKind::KwUInt8),
    ("uint16", TokenKind::KwUInt16),
    ("uint32", TokenKind::KwUInt32),
    ("uint64", TokenKind::KwUInt64),
    ("float32", TokenKind::KwFloat32),
    ("float64", TokenKind::KwFloat64),
    ("boolean", TokenKind::KwBoolean),
    ("string", TokenKind::KwString),
    ("byte", TokenKind::KwByte),
    ("void", TokenKind::KwVoid),
];

impl TokenKind {
    /// Stable numeric identifier of this kind.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Resolve a scanned identifier against the keyword table.
    #[must_use]
    pub fn lookup_identifier(name: &str) -> Self {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == name)
            .map_or(Self::Identifier, |&(_, kind)| kind)
    }

    /// Binary binding strength. Higher binds tighter; 0 means the kind
    /// is not a binary operator.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or | Self::Vbar | Self::Colon => 1,
            Self::And => 2,
            Self::Equal | Self::NotEqual => 3,
            Self::LessThan | Self::LessEqual | Self::GreaterThan | Self::GreaterEqual => 4,
            Self::Plus | Self::Minus => 5,
            Self::Asterisk | Self::Slash | Self::Percent => 6,
            _ => 0,
        }
    }
}

/// A single token with its kind, text, and source location.
///
/// `file` and `source` are shared with every other token of the same
/// source unit, so a token can render its own diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact text consumed, quotes and numeric separators included.
    pub lexeme: String,
    pub span: Span,
    pub file: Arc<str>,
    pub source: Arc<str>,
}

impl Token {
    /// Full text of the line this token starts on.
    #[must_use]
    pub fn line_text(&self) -> &str {
        crate::diagnostic::line_text(&self.source, self.span.line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}('{}') at {}",
            self.kind.ordinal(),
            self.lexeme,
            self.span
        )
    }
}
