#![no_main]
use libfuzzer_sys::{arbitrary, fuzz_target};
use arbitrary::Arbitrary;

const MAX_ROWS: usize = 20;
const MAX_FIELDS: usize = 10;

#[derive(Arbitrary, Debug)]
struct Table {
    rows: Vec<Vec<String>>,
}

/// Writes every field quoted, so any text must survive a parse unchanged.
fn write_quoted(rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in rows {
        for (i, field) in row.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        }
        out.push('\n');
    }
    out
}

fuzz_target!(|table: Table| {
    let rows: Vec<Vec<String>> = table
        .rows
        .into_iter()
        .take(MAX_ROWS)
        .map(|row| {
            row.into_iter()
                .take(MAX_FIELDS)
                // line breaks inside quotes come back as \n
                .map(|f| f.replace("\r\n", "\n").replace('\r', ""))
                .collect::<Vec<_>>()
        })
        // an empty row writes an empty line, which is skipped
        .filter(|row| !row.is_empty())
        .collect();

    let text = write_quoted(&rows);
    match csvtojson::parse_rows(&text, ',', None) {
        Ok(parsed) => assert_eq!(parsed, rows, "input:\n{}", text),
        Err(e) => panic!("failed to parse quoted table: {}\n{}", e, text),
    }
});
