use crate::error::{Error, Result};

/// Where record field names come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HeaderSource {
    /// The first row of the table names the fields; it is not a record.
    #[default]
    DeriveFromData,
    /// A raw header line parsed with the table's own delimiter and comment
    /// marker. Every row of the table is a record.
    External(String),
}

impl HeaderSource {
    /// An empty line means the header is taken from the data.
    pub fn from_line(line: &str) -> Self {
        if line.is_empty() {
            HeaderSource::DeriveFromData
        } else {
            HeaderSource::External(line.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Field separator (default: `,`)
    pub delimiter: char,
    /// Lines starting with this character are skipped
    pub comment: Option<char>,
    pub header: HeaderSource,
    /// Per-level indent unit for JSON output; empty means compact
    pub indent: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delimiter: ',',
            comment: None,
            header: HeaderSource::DeriveFromData,
            indent: String::new(),
        }
    }
}

impl Options {
    pub fn validate(&self) -> Result<()> {
        if is_reserved(self.delimiter) {
            return Err(Error::Config(format!(
                "the delimiter can't be {:?}",
                self.delimiter
            )));
        }
        if let Some(c) = self.comment {
            if is_reserved(c) {
                return Err(Error::Config(format!("the comment can't be {:?}", c)));
            }
            if c == self.delimiter {
                return Err(Error::Config(
                    "the comment and the delimiter must differ".to_string(),
                ));
            }
        }
        if !self.indent.chars().all(is_json_whitespace) {
            return Err(Error::Config(
                "the indent should contain only spaces, tabs or line breaks".to_string(),
            ));
        }
        Ok(())
    }
}

/// The only whitespace JSON allows between tokens.
fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_reserved(c: char) -> bool {
    matches!(c, '"' | '\r' | '\n')
}

/// Interpret a delimiter flag value, which must be exactly one character.
pub fn parse_delimiter(s: &str) -> Result<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::Config(
            "the delimiter should be exactly one character".to_string(),
        )),
    }
}

/// Interpret a comment flag value: empty disables comments, otherwise one character.
pub fn parse_comment(s: &str) -> Result<Option<char>> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(Error::Config(
            "the comment should be exactly one character".to_string(),
        )),
    }
}
