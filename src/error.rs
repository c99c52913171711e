//! Error types for scanning and session requests.

use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by the scanning primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// No rule in the pattern table matches at `offset`.
    #[error("no pattern matches at byte offset {offset}")]
    NoMatch { offset: usize },

    /// Byte input is not valid UTF-8 past `offset`.
    #[error("unsupported input: invalid UTF-8 after byte offset {offset}")]
    InvalidUtf8 { offset: usize },
}

/// Failures returned by [`Session`](crate::Session) requests.
///
/// The session is left exactly as it was before the failing call.
#[derive(Debug, Error)]
pub enum LexError {
    /// Neither new data nor a non-empty token sequence to re-tag.
    #[error("no data to parse")]
    NoInput,

    /// The first of several arguments must be a dialect name given as text.
    #[error("expected a dialect name as the first argument, found {found}")]
    MalformedRequest { found: &'static str },

    /// The requested dialect name is not registered.
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),

    /// The scanner could not tokenize the input.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T, E = LexError> = std::result::Result<T, E>;
