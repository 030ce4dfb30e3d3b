//! Tests for group aggregation.

use optab_model::{PipelineError, Table};
use optab_transform::aggregate;

/// Columns: name, sentiment_tag, opinion, raw_comments, tf.
fn table(rows: &[[&str; 5]]) -> Table {
    let mut table = Table::new(
        ["name", "sentiment_tag", "opinion", "raw_comments", "tf"]
            .iter()
            .map(|c| (*c).to_string())
            .collect(),
    );
    for row in rows {
        table.push_row(row.iter().map(|c| (*c).to_string()).collect());
    }
    table
}

#[test]
fn groups_by_sentiment_and_opinion() {
    let input = table(&[
        ["a", "pos", "good", "x", "1"],
        ["b", "neg", "bad", "y", "1"],
        ["c", "pos", "good", "z", "0"],
    ]);
    let (output, summary) = aggregate(&input).expect("aggregate");
    assert_eq!(summary.groups_total, 2);
    assert_eq!(summary.groups_emitted, 2);
    // One record per group, first member wins.
    assert_eq!(output.cell(0, "name"), Some("a"));
    assert_eq!(output.cell(1, "name"), Some("b"));
}

#[test]
fn identical_keys_group_regardless_of_input_order() {
    let input = table(&[
        ["a", "pos", "good", "x", "1"],
        ["b", "neg", "bad", "y", "1"],
        ["c", "pos", "good", "z", "1"],
    ]);
    let (output, summary) = aggregate(&input).expect("aggregate");
    assert_eq!(summary.groups_total, 2);
    assert_eq!(output.cell(0, "raw_comments"), Some("x$z"));
}

#[test]
fn zero_sum_group_is_discarded_but_counted() {
    let input = table(&[
        ["a", "pos", "good", "x", "0"],
        ["b", "pos", "good", "y", ""],
        ["c", "neg", "bad", "z", "1"],
    ]);
    let (output, summary) = aggregate(&input).expect("aggregate");
    assert_eq!(summary.groups_total, 2);
    assert_eq!(summary.groups_emitted, 1);
    assert_eq!(output.row_count(), 1);
    assert_eq!(output.cell(0, "name"), Some("c"));
}

#[test]
fn single_member_with_flag_one_survives() {
    let input = table(&[["a", "pos", "good", "x", "1"]]);
    let (output, _) = aggregate(&input).expect("aggregate");
    assert_eq!(output.row_count(), 1);
}

#[test]
fn comments_merge_drops_empties_and_trims() {
    let input = table(&[
        ["a", "pos", "good", "a", "1"],
        ["b", "pos", "good", "", "0"],
        ["c", "pos", "good", " b ", "0"],
    ]);
    let (output, _) = aggregate(&input).expect("aggregate");
    assert_eq!(output.cell(0, "raw_comments"), Some("a$b"));
}

#[test]
fn tf_is_renamed_and_keeps_first_member_value() {
    let input = table(&[
        ["a", "pos", "good", "x", "0"],
        ["b", "pos", "good", "y", "1"],
    ]);
    let (output, _) = aggregate(&input).expect("aggregate");
    assert!(output.column_index("tf").is_none());
    // The sum (1) decided survival, but the emitted value is the first
    // member's original cell.
    assert_eq!(output.cell(0, "done_time"), Some("0"));
}

#[test]
fn missing_key_fields_group_under_empty_string() {
    let mut input = Table::new(vec!["raw_comments".to_string(), "tf".to_string()]);
    input.push_row(vec!["x".to_string(), "1".to_string()]);
    input.push_row(vec!["y".to_string(), "0".to_string()]);
    let (output, summary) = aggregate(&input).expect("aggregate");
    assert_eq!(summary.groups_total, 1);
    assert_eq!(output.cell(0, "raw_comments"), Some("x$y"));
}

#[test]
fn invalid_flag_reports_one_based_row() {
    let input = table(&[
        ["a", "pos", "good", "x", "1"],
        ["b", "pos", "good", "y", "maybe"],
    ]);
    let err = aggregate(&input).unwrap_err();
    match err {
        PipelineError::InvalidFlag { value, row } => {
            assert_eq!(value, "maybe");
            // Header is row 1, so the second data row is row 3.
            assert_eq!(row, Some(3));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn first_occurrence_order_is_preserved() {
    let input = table(&[
        ["a", "z", "last", "x", "1"],
        ["b", "a", "first", "y", "1"],
        ["c", "z", "last", "z", "1"],
    ]);
    let (output, _) = aggregate(&input).expect("aggregate");
    assert_eq!(output.cell(0, "opinion"), Some("last"));
    assert_eq!(output.cell(1, "opinion"), Some("first"));
}
