//! Row expansion over the multi-value comment cell.

use optab_model::{COMMENT_SEPARATOR, ExpandSummary, RAW_COMMENTS, Table};

/// Split each row's `raw_comments` cell on `$`, emitting one full row copy
/// per piece with the piece (trimmed) in place of the original cell.
///
/// Order is preserved: all expansions of row i precede all expansions of
/// row i+1. A cell with no delimiter contributes exactly one row, so the
/// output is never smaller than the input. A table without a
/// `raw_comments` column passes through unchanged.
pub fn expand_comments(table: &Table) -> (Table, ExpandSummary) {
    let input_rows = table.row_count();
    let Some(comments_idx) = table.column_index(RAW_COMMENTS) else {
        return (
            table.clone(),
            ExpandSummary {
                input_rows,
                output_rows: input_rows,
            },
        );
    };

    let mut expanded = Table::new(table.columns.clone());
    for row in &table.rows {
        for piece in row[comments_idx].split(COMMENT_SEPARATOR) {
            let mut copy = row.clone();
            copy[comments_idx] = piece.trim().to_string();
            expanded.push_row(copy);
        }
    }

    let summary = ExpandSummary {
        input_rows,
        output_rows: expanded.row_count(),
    };
    tracing::debug!(
        input_rows = summary.input_rows,
        output_rows = summary.output_rows,
        "expanded comment cells"
    );
    (expanded, summary)
}
