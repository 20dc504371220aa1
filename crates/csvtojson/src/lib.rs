#![doc = include_str!("../README.md")]

pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod path;
pub mod record;
pub mod shape;

pub use crate::convert::{BatchReport, Converter, FileFailure, Source};
pub use crate::decode::{Row, parse_rows};
pub use crate::error::{Error, ParseError, ParseErrorKind, Result};
pub use crate::options::{HeaderSource, Options};
pub use crate::record::{Document, Record};

use std::io::Read;

/// Convert one delimited table to JSON bytes.
pub fn convert_str(input: &str, options: &Options) -> Result<Vec<u8>> {
    let rows = parse_rows(input, options.delimiter, options.comment)?;
    let document = shape::shape(rows, options)?;
    encode::to_vec(&document, &options.indent)
}

/// Read a whole stream and convert it. Bytes that are not UTF-8 are
/// replaced with U+FFFD.
pub fn convert_reader<R: Read>(mut reader: R, options: &Options) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    convert_str(&String::from_utf8_lossy(&bytes), options)
}
