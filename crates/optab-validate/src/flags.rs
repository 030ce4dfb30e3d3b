//! Annotation-completeness gate.

use optab_model::{PipelineError, Result, TF, Table};

/// How many offending row numbers an [`PipelineError::UnannotatedRows`]
/// report lists before collapsing the rest into a count.
const MAX_REPORTED_ROWS: usize = 10;

/// Verify every `tf` cell is exactly `"0"` or `"1"` after trimming.
///
/// Row numbers in the report are 1-based and count the header as row 1, so
/// the first data row is row 2. An empty cell fails here even though the
/// numeric coercion path would accept it as 0: an unfilled flag means the
/// row was never annotated.
pub fn check_annotation_complete(table: &Table) -> Result<()> {
    let Some(tf_idx) = table.column_index(TF) else {
        // No tf column at all: every row is unannotated.
        return Err(unannotated(
            (0..table.row_count()).map(|idx| idx + 2).collect(),
        ));
    };

    let offenders: Vec<usize> = table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            let value = row.get(tf_idx).map(String::as_str).unwrap_or("").trim();
            value != "0" && value != "1"
        })
        .map(|(idx, _)| idx + 2)
        .collect();

    if offenders.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = offenders.len(), "annotation gate failed");
        Err(unannotated(offenders))
    }
}

fn unannotated(offenders: Vec<usize>) -> PipelineError {
    let more = offenders.len().saturating_sub(MAX_REPORTED_ROWS);
    let mut rows = offenders;
    rows.truncate(MAX_REPORTED_ROWS);
    PipelineError::UnannotatedRows { rows, more }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with_tf(values: &[&str]) -> Table {
        let mut table = Table::new(vec!["name".to_string(), TF.to_string()]);
        for value in values {
            table.push_row(vec!["x".to_string(), (*value).to_string()]);
        }
        table
    }

    #[test]
    fn passes_when_all_flags_are_binary() {
        let table = table_with_tf(&["0", "1", " 1 "]);
        assert!(check_annotation_complete(&table).is_ok());
    }

    #[test]
    fn empty_flag_fails_the_gate() {
        let table = table_with_tf(&["1", "", "0"]);
        let err = check_annotation_complete(&table).unwrap_err();
        match err {
            PipelineError::UnannotatedRows { rows, more } => {
                assert_eq!(rows, vec![3]);
                assert_eq!(more, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lists_at_most_ten_rows() {
        let values: Vec<&str> = std::iter::repeat_n("x", 14).collect();
        let table = table_with_tf(&values);
        let err = check_annotation_complete(&table).unwrap_err();
        match err {
            PipelineError::UnannotatedRows { rows, more } => {
                assert_eq!(rows.len(), 10);
                assert_eq!(rows[0], 2);
                assert_eq!(rows[9], 11);
                assert_eq!(more, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
