use log::{Level, debug, log_enabled};

use crate::error::{ParseError, ParseErrorKind};

/// One parsed record: its fields in input order.
pub type Row = Vec<String>;

/// Lazily reads rows out of delimited text.
///
/// Records end at `\n` (a `\r\n` pair counts as `\n`). Empty lines are
/// skipped, as is any line that starts a record with the comment marker.
/// A field beginning with `"` is quoted: it may hold the delimiter, line
/// breaks and `""` for a literal quote, and must be followed by the
/// delimiter or the end of the line. Iteration stops after the first error.
pub struct RowReader<'a> {
    rest: &'a str,
    line: usize,
    delimiter: char,
    comment: Option<char>,
    failed: bool,
}

impl<'a> RowReader<'a> {
    pub fn new(input: &'a str, delimiter: char, comment: Option<char>) -> Self {
        Self {
            rest: input,
            line: 0,
            delimiter,
            comment,
            failed: false,
        }
    }

    /// Number of the physical line read most recently (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let rest: &'a str = self.rest;
        if rest.is_empty() {
            return None;
        }
        self.line += 1;
        match rest.find('\n') {
            Some(i) => {
                self.rest = &rest[i + 1..];
                let line = &rest[..i];
                Some(line.strip_suffix('\r').unwrap_or(line))
            }
            None => {
                self.rest = "";
                Some(rest)
            }
        }
    }

    fn error(&self, line: &str, rest: &str, kind: ParseErrorKind) -> ParseError {
        ParseError {
            line: self.line,
            column: column(line, rest),
            kind,
        }
    }

    fn read_row(&mut self) -> Result<Option<Row>, ParseError> {
        let mut line = loop {
            let Some(line) = self.next_line() else {
                return Ok(None);
            };
            if line.is_empty() {
                continue;
            }
            if self.comment.is_some() && line.chars().next() == self.comment {
                continue;
            }
            break line;
        };

        let mut rest = line;
        let mut fields = Row::new();
        'fields: loop {
            let Some(quoted) = rest.strip_prefix('"') else {
                let end = rest.find(self.delimiter).unwrap_or(rest.len());
                let field = &rest[..end];
                if let Some(q) = field.find('"') {
                    return Err(self.error(line, &rest[q..], ParseErrorKind::BareQuote));
                }
                fields.push(field.to_string());
                if end == rest.len() {
                    return Ok(Some(fields));
                }
                rest = &rest[end + self.delimiter.len_utf8()..];
                continue;
            };

            // an unterminated field is reported where it opened
            let start = self.error(line, rest, ParseErrorKind::Quote);
            let mut field = String::new();
            rest = quoted;
            loop {
                let Some(i) = rest.find('"') else {
                    field.push_str(rest);
                    match self.next_line() {
                        Some(next) => {
                            field.push('\n');
                            line = next;
                            rest = next;
                            continue;
                        }
                        None => return Err(start),
                    }
                };
                field.push_str(&rest[..i]);
                rest = &rest[i + 1..];
                let mut chars = rest.chars();
                match chars.next() {
                    Some('"') => {
                        field.push('"');
                        rest = chars.as_str();
                    }
                    Some(c) if c == self.delimiter => {
                        fields.push(field);
                        rest = chars.as_str();
                        continue 'fields;
                    }
                    None => {
                        fields.push(field);
                        return Ok(Some(fields));
                    }
                    Some(_) => return Err(self.error(line, rest, ParseErrorKind::Quote)),
                }
            }
        }
    }
}

impl Iterator for RowReader<'_> {
    type Item = Result<Row, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.read_row() {
            Ok(row) => row.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// 1-based character column of `rest` within `line`, where `rest` is a suffix of `line`.
fn column(line: &str, rest: &str) -> usize {
    let offset = line.len() - rest.len();
    line[..offset].chars().count() + 1
}

/// Parse a whole table into rows.
pub fn parse_rows(
    input: &str,
    delimiter: char,
    comment: Option<char>,
) -> Result<Vec<Row>, ParseError> {
    let rows = RowReader::new(input, delimiter, comment).collect::<Result<Vec<_>, _>>()?;
    if log_enabled!(Level::Debug) {
        for (i, row) in rows.iter().enumerate() {
            debug!("{}: {:?}", i, row);
        }
    }
    Ok(rows)
}
