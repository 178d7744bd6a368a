//! Front end of the VSharp compiler.
//!
//! Turns VSharp source text into positioned tokens and reports lexical
//! errors as caret-annotated diagnostics pointing into the source.
//!
//! # Quick start
//!
//! ```
//! use vsharp::{TokenKind, tokenize};
//!
//! let lexed = tokenize("var x = 10;", "main.vs");
//! let kinds: Vec<_> = lexed.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::KwVar,
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::Integer,
//!         TokenKind::Semicolon,
//!         TokenKind::EndOfFile,
//!     ]
//! );
//! assert!(!lexed.has_errors());
//! ```
//!
//! ## Rendering diagnostics
//!
//! ```
//! let lexed = vsharp::tokenize("x @ y", "main.vs");
//! assert_eq!(
//!     lexed.diagnostics[0].to_string(),
//!     "error: Illegal character\n --> main.vs:1:3\n1 | x @ y\n  |   ^"
//! );
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::fs;
use std::path::{Path, PathBuf};

pub mod cli;
pub mod diagnostic;
pub mod lexer;
pub mod token;
pub mod version;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use lexer::{Lexed, Lexer, tokenize};
pub use token::{KEYWORDS, Span, Token, TokenKind};

/// Failures outside the lexer itself. Malformed source text is never an
/// `Error`; it surfaces as diagnostics on [`Lexed`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file could not be read or was not valid UTF-8.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Command output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

/// Read a source file and decode it as UTF-8.
pub fn load_source(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and tokenize a file in one step, naming it by its path in
/// diagnostics.
pub fn tokenize_file(path: impl AsRef<Path>) -> Result<Lexed, Error> {
    let path = path.as_ref();
    let source = load_source(path)?;
    Ok(tokenize(&source, &path.display().to_string()))
}
