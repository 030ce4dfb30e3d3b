//! Error taxonomy for the table pipeline.
//!
//! Every variant renders a human-readable message with concrete remediation
//! instructions; callers surface `Display` output directly. All variants are
//! terminal for the current operation: no partial output is produced and the
//! previously committed table stays active.

use thiserror::Error;

use crate::schema::REQUIRED_COLUMNS;

/// Errors that can occur while decoding, validating, or aggregating a table.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Wrong number of columns in the header.
    #[error("{}", schema_length_message(*actual, columns))]
    SchemaLength {
        actual: usize,
        columns: Vec<String>,
    },

    /// A column exists at `position` but carries the wrong name.
    ///
    /// Only the first mismatching position is reported; `position` is
    /// 1-based.
    #[error("{}", schema_order_message(*position, expected, actual))]
    SchemaOrder {
        position: usize,
        expected: String,
        actual: String,
    },

    /// The decoded table has a header but no data rows.
    #[error("the file contains no data rows; add at least one row below the header and re-upload")]
    EmptyInput,

    /// A flag cell holds a value outside {empty, 0, 1}.
    ///
    /// `row` is the 1-based source row number (the header counts as row 1)
    /// when the aggregation path knows it; the interactive-edit path does
    /// not.
    #[error("{}", invalid_flag_message(value, *row))]
    InvalidFlag { value: String, row: Option<usize> },

    /// The annotation gate found rows whose `tf` cell is not yet 0 or 1.
    #[error("{}", unannotated_message(rows, *more))]
    UnannotatedRows { rows: Vec<usize>, more: usize },

    /// A session operation needs a table but none has been loaded yet.
    #[error("no table is loaded; upload a file first")]
    NoActiveTable,

    /// A row edit or delete addressed a row that does not exist.
    #[error("row index {row_idx} is out of range; the table has {row_count} rows")]
    RowOutOfRange { row_idx: usize, row_count: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

fn schema_length_message(actual: usize, columns: &[String]) -> String {
    let directive = if actual > REQUIRED_COLUMNS.len() {
        format!(
            "remove the {} extra column(s) so only the required 13 remain",
            actual - REQUIRED_COLUMNS.len()
        )
    } else {
        format!(
            "add the {} missing column(s) in the required order",
            REQUIRED_COLUMNS.len() - actual
        )
    };
    format!(
        "expected {} columns but found {}; found [{}]; required [{}]; {}",
        REQUIRED_COLUMNS.len(),
        actual,
        columns.join(", "),
        REQUIRED_COLUMNS.join(", "),
        directive
    )
}

fn schema_order_message(position: usize, expected: &str, actual: &str) -> String {
    let shown = if actual.is_empty() { "(empty)" } else { actual };
    format!(
        "column {position} should be '{expected}' but found '{shown}'; rename or fill column {position} so it reads '{expected}'"
    )
}

fn invalid_flag_message(value: &str, row: Option<usize>) -> String {
    match row {
        Some(row) => {
            format!("row {row}: tf value '{value}' is not valid; only 0, 1 or empty are accepted")
        }
        None => format!("tf value '{value}' is not valid; only 0, 1 or empty are accepted"),
    }
}

fn unannotated_message(rows: &[usize], more: usize) -> String {
    let listed: Vec<String> = rows.iter().map(ToString::to_string).collect();
    if more > 0 {
        format!(
            "every tf cell must be 0 or 1 before aggregation; fix rows {} (and {} more)",
            listed.join(", "),
            more
        )
    } else {
        format!(
            "every tf cell must be 0 or 1 before aggregation; fix rows {}",
            listed.join(", ")
        )
    }
}
