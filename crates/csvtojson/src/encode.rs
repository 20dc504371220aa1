//! JSON output for documents

use std::io::Write;

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::Result;
use crate::record::Record;

/// Write `document` as a JSON array of objects.
///
/// An empty `indent` gives compact output; otherwise each nesting level is
/// indented by one copy of `indent`. No trailing newline is written.
pub fn to_writer<W: Write>(writer: W, document: &[Record], indent: &str) -> Result<()> {
    if indent.is_empty() {
        serde_json::to_writer(writer, document)?;
    } else {
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = Serializer::with_formatter(writer, formatter);
        document.serialize(&mut ser)?;
    }
    Ok(())
}

pub fn to_vec(document: &[Record], indent: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(128);
    to_writer(&mut out, document, indent)?;
    Ok(out)
}
