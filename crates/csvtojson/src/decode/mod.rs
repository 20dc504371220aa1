//! Decoding of delimited text into rows of text fields

pub mod reader;

pub use reader::{Row, RowReader, parse_rows};
