//! Input discovery and output naming by file extension

use std::path::{Path, PathBuf};

/// Extension of discovered inputs, matched in any letter case.
pub const CSV_EXT: &str = "csv";
/// Extension given to every output document.
pub const JSON_EXT: &str = "json";

/// Split a file name at its last `.`; the extension keeps no dot.
fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(i) => (&name[..i], Some(&name[i + 1..])),
        None => (name, None),
    }
}

pub fn is_csv_path(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    split_extension(&name)
        .1
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXT))
}

/// Replace the extension of the file name in `relative` with `.json`,
/// keeping its directory. A name without an extension gets one appended.
pub fn output_path_for(relative: &Path) -> PathBuf {
    let Some(name) = relative.file_name() else {
        return relative.join(format!(".{}", JSON_EXT));
    };
    match name.to_str() {
        Some(name) => {
            let (stem, _) = split_extension(name);
            relative.with_file_name(format!("{}.{}", stem, JSON_EXT))
        }
        // `with_extension` treats a lone leading dot as part of the stem
        None if name.as_encoded_bytes().iter().rposition(|&b| b == b'.') == Some(0) => {
            relative.with_file_name(format!(".{}", JSON_EXT))
        }
        None => relative.with_extension(JSON_EXT),
    }
}
