use csvtojson::shape::{parse_header, records_from_rows, shape, split_header};
use csvtojson::{HeaderSource, Options, ParseErrorKind, parse_rows};
use serde_json::json;

fn rows(v: &[&[&str]]) -> Vec<Vec<String>> {
    v.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn external(line: &str) -> Options {
    Options {
        header: HeaderSource::External(line.to_string()),
        ..Options::default()
    }
}

#[test]
fn first_row_becomes_header() -> Result<(), Box<dyn std::error::Error>> {
    let doc = shape(
        rows(&[&["name", "age"], &["Alice", "30"], &["Bob", "25"]]),
        &Options::default(),
    )?;
    assert_eq!(doc.len(), 2);
    assert_eq!(
        serde_json::to_value(&doc)?,
        json!([{"name":"Alice","age":"30"},{"name":"Bob","age":"25"}])
    );
    Ok(())
}

#[test]
fn external_header_makes_every_row_data() -> Result<(), Box<dyn std::error::Error>> {
    let doc = shape(rows(&[&["1", "2"], &["3", "4"]]), &external("x,y"))?;
    assert_eq!(
        serde_json::to_value(&doc)?,
        json!([{"x":"1","y":"2"},{"x":"3","y":"4"}])
    );
    Ok(())
}

#[test]
fn external_header_uses_table_delimiter() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options {
        delimiter: ';',
        ..external("\"a;1\";b")
    };
    let header = parse_header("\"a;1\";b", &options)?;
    assert_eq!(header, vec!["a;1".to_string(), "b".to_string()]);
    let doc = shape(rows(&[&["x", "y"]]), &options)?;
    assert_eq!(serde_json::to_value(&doc)?, json!([{"a;1":"x","b":"y"}]));
    Ok(())
}

#[test]
fn external_header_keeps_only_first_row() -> Result<(), Box<dyn std::error::Error>> {
    let header = parse_header("a,b\nc,d", &Options::default())?;
    assert_eq!(header, vec!["a".to_string(), "b".to_string()]);
    Ok(())
}

#[test]
fn external_header_without_fields_is_an_error() {
    let options = Options {
        comment: Some('#'),
        ..external("#x,y")
    };
    let err = shape(rows(&[&["1", "2"]]), &options).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptyHeader);
}

#[test]
fn short_row_omits_missing_names() -> Result<(), Box<dyn std::error::Error>> {
    let doc = shape(rows(&[&["name", "age"], &["Alice"]]), &Options::default())?;
    assert_eq!(serde_json::to_value(&doc)?, json!([{"name":"Alice"}]));
    assert_eq!(doc[0].get("age"), None);
    assert_eq!(doc[0].len(), 1);
    Ok(())
}

#[test]
fn long_row_drops_extra_fields() -> Result<(), Box<dyn std::error::Error>> {
    let doc = records_from_rows(&rows(&[&["1", "2", "3"]]), &["a".to_string(), "b".to_string()]);
    assert_eq!(serde_json::to_value(&doc)?, json!([{"a":"1","b":"2"}]));
    Ok(())
}

#[test]
fn duplicate_header_overwrites_value_in_first_position() -> Result<(), Box<dyn std::error::Error>> {
    let doc = shape(
        rows(&[&["a", "b", "a"], &["1", "2", "3"], &["4", "5"]]),
        &Options::default(),
    )?;
    let keys: Vec<&str> = doc[0].keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(doc[0].get("a"), Some("3"));
    assert_eq!(doc[1].get("a"), Some("4"));
    assert_eq!(String::from_utf8(csvtojson::encode::to_vec(&doc, "")?)?, r#"[{"a":"3","b":"2"},{"a":"4","b":"5"}]"#);
    Ok(())
}

#[test]
fn empty_table_yields_empty_document() -> Result<(), Box<dyn std::error::Error>> {
    assert!(shape(Vec::new(), &Options::default())?.is_empty());
    let (header, data) = split_header(rows(&[&["a"]]), &Options::default())?;
    assert_eq!(header, vec!["a".to_string()]);
    assert!(data.is_empty());
    Ok(())
}

#[test]
fn record_count_and_order_follow_rows() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::from("id,v,w\n");
    for i in 0..50 {
        match i % 3 {
            0 => input.push_str(&format!("{i}\n")),
            1 => input.push_str(&format!("{i},x\n")),
            _ => input.push_str(&format!("{i},x,y,z\n")),
        }
    }
    let doc = shape(parse_rows(&input, ',', None)?, &Options::default())?;
    assert_eq!(doc.len(), 50);
    for (i, record) in doc.iter().enumerate() {
        assert!(record.len() <= 3);
        assert_eq!(record.get("id"), Some(i.to_string().as_str()));
    }
    Ok(())
}

#[test]
fn comment_rows_excluded_from_header_and_data() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options {
        comment: Some('%'),
        ..Options::default()
    };
    let rows = parse_rows("%skip,me\nk,v\n%also\n1,2\n", options.delimiter, options.comment)?;
    let doc = shape(rows, &options)?;
    assert_eq!(serde_json::to_value(&doc)?, json!([{"k":"1","v":"2"}]));
    Ok(())
}
