//! Order-sensitive schema validation.

use optab_model::{PipelineError, REQUIRED_COLUMNS, Result};

/// Validate a column-name list against the required schema.
///
/// The length check runs first; a list of the wrong size never reaches the
/// positional compare. The positional compare is fail-fast: only the first
/// mismatching column is reported, even when later columns also differ.
/// Names are compared trimmed and case-insensitively.
pub fn validate_schema(columns: &[String]) -> Result<()> {
    if columns.len() != REQUIRED_COLUMNS.len() {
        return Err(PipelineError::SchemaLength {
            actual: columns.len(),
            columns: columns.to_vec(),
        });
    }
    for (idx, expected) in REQUIRED_COLUMNS.iter().enumerate() {
        let actual = columns[idx].trim();
        if !actual.eq_ignore_ascii_case(expected) {
            return Err(PipelineError::SchemaOrder {
                position: idx + 1,
                expected: (*expected).to_string(),
                actual: actual.to_string(),
            });
        }
    }
    Ok(())
}
