//! Turning parsed rows into records keyed by header names

use log::debug;

use crate::decode::{Row, parse_rows};
use crate::error::{ParseError, ParseErrorKind};
use crate::options::{HeaderSource, Options};
use crate::record::{Document, Record};

/// Shape a parsed table into records, taking field names from `options.header`.
pub fn shape(rows: Vec<Row>, options: &Options) -> Result<Document, ParseError> {
    let (header, rows) = split_header(rows, options)?;
    debug!("records: {:?}, headers: {:?}", rows, header);
    Ok(records_from_rows(&rows, &header))
}

/// Separate the header from the data rows.
///
/// A derived header is the first row (none for an empty table). An external
/// header leaves every row as data.
pub fn split_header(rows: Vec<Row>, options: &Options) -> Result<(Row, Vec<Row>), ParseError> {
    match &options.header {
        HeaderSource::DeriveFromData => {
            let mut rows = rows.into_iter();
            let header = rows.next().unwrap_or_default();
            Ok((header, rows.collect()))
        }
        HeaderSource::External(line) => Ok((parse_header(line, options)?, rows)),
    }
}

/// Parse a header line with the table's delimiter and comment marker.
/// Rows after the first are ignored.
pub fn parse_header(line: &str, options: &Options) -> Result<Row, ParseError> {
    parse_rows(line, options.delimiter, options.comment)?
        .into_iter()
        .next()
        .ok_or(ParseError {
            line: 1,
            column: 1,
            kind: ParseErrorKind::EmptyHeader,
        })
}

/// Pair each row's fields with header names by position.
///
/// Fields past the end of the header are dropped; names past the end of a
/// short row are left out of its record.
pub fn records_from_rows(rows: &[Row], header: &[String]) -> Document {
    rows.iter()
        .map(|row| {
            header
                .iter()
                .zip(row)
                .map(|(name, value)| (name.as_str(), value.as_str()))
                .collect::<Record>()
        })
        .collect()
}
