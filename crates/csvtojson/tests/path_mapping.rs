use std::path::{Path, PathBuf};

use csvtojson::path::{is_csv_path, output_path_for};

#[test]
fn extension_is_replaced() {
    assert_eq!(output_path_for(Path::new("a/b/file.csv")), PathBuf::from("a/b/file.json"));
    assert_eq!(output_path_for(Path::new("file.CSV")), PathBuf::from("file.json"));
}

#[test]
fn missing_extension_is_appended() {
    assert_eq!(output_path_for(Path::new("file")), PathBuf::from("file.json"));
    assert_eq!(output_path_for(Path::new("dir/file")), PathBuf::from("dir/file.json"));
}

#[test]
fn only_last_extension_is_replaced() {
    assert_eq!(output_path_for(Path::new("a.tar.csv")), PathBuf::from("a.tar.json"));
    assert_eq!(output_path_for(Path::new(".csv")), PathBuf::from(".json"));
}

#[test]
fn mapping_is_idempotent() {
    let once = output_path_for(Path::new("x/y.csv"));
    assert_eq!(output_path_for(&once), once);
}

#[test]
fn csv_detection_ignores_case() {
    assert!(is_csv_path(Path::new("a/b.csv")));
    assert!(is_csv_path(Path::new("B.CsV")));
    assert!(is_csv_path(Path::new(".csv")));
    assert!(!is_csv_path(Path::new("b.tsv")));
    assert!(!is_csv_path(Path::new("csv")));
    assert!(!is_csv_path(Path::new("b.csv.bak")));
}

#[cfg(unix)]
#[test]
fn non_utf8_names_follow_last_dot_rule() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dotted = Path::new("dir").join(OsStr::from_bytes(b".\xff"));
    assert_eq!(output_path_for(&dotted), PathBuf::from("dir/.json"));

    let named = Path::new("dir").join(OsStr::from_bytes(b"f\xff.csv"));
    assert_eq!(
        output_path_for(&named),
        Path::new("dir").join(OsStr::from_bytes(b"f\xff.json"))
    );

    let bare = Path::new(OsStr::from_bytes(b"f\xff"));
    assert_eq!(output_path_for(bare), PathBuf::from(OsStr::from_bytes(b"f\xff.json")));
}
