//! Tests for delivery CSV encoding.

use optab_ingest::decode_annotated_csv;
use optab_model::Table;
use optab_output::{UTF8_BOM, encode_csv, write_csv};

fn sample() -> Table {
    let mut table = Table::new(vec!["name".to_string(), "done_time".to_string()]);
    table.push_row(vec!["soup, hot".to_string(), "1".to_string()]);
    table.push_row(vec!["面条".to_string(), "0".to_string()]);
    table
}

#[test]
fn payload_starts_with_bom() {
    let bytes = encode_csv(&sample()).expect("encode");
    assert!(bytes.starts_with(UTF8_BOM));
}

#[test]
fn payload_is_comma_delimited_with_header() {
    let bytes = encode_csv(&sample()).expect("encode");
    let text = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).expect("utf8");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("name,done_time"));
    // Embedded comma gets quoted.
    assert_eq!(lines.next(), Some("\"soup, hot\",1"));
    assert_eq!(lines.next(), Some("面条,0"));
}

#[test]
fn written_file_round_trips_through_the_annotated_decoder() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("delivery.csv");
    write_csv(&path, &sample()).expect("write csv");

    let bytes = std::fs::read(&path).expect("read back");
    let decoded = decode_annotated_csv(bytes.as_slice()).expect("decode");
    assert_eq!(decoded.columns, vec!["name", "done_time"]);
    assert_eq!(decoded.cell(0, "name"), Some("soup, hot"));
    assert_eq!(decoded.cell(1, "name"), Some("面条"));
}
