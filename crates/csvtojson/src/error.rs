use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("{0}")]
    Config(String),

    #[error("cannot walk {path:?}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = core::result::Result<T, Error>;

/// Malformed delimited text. `line` and `column` are 1-based; the column
/// counts characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error on line {line}, column {column}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A `"` inside a field that did not start with one.
    BareQuote,
    /// A quoted field that is never closed, or is closed and followed by
    /// something other than the delimiter or end of line.
    Quote,
    /// An external header line that holds no row.
    EmptyHeader,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::BareQuote => f.write_str("bare \" in non-quoted field"),
            ParseErrorKind::Quote => f.write_str("extraneous or missing \" in quoted field"),
            ParseErrorKind::EmptyHeader => f.write_str("header line contains no fields"),
        }
    }
}
