//! Annotation flag normalization.
//!
//! Two contexts with different alphabets:
//!
//! - numeric (aggregation): empty means 0, any numeric 0 or 1 is accepted;
//! - edit (interactive): only the literal keystrokes `""`, `"0"`, `"1"`.

use optab_model::{PipelineError, Result};

/// Coerce a flag cell to 0 or 1 for aggregation.
///
/// `row`, when known, is the 1-based source row number with the header
/// counted as row 1; it is threaded into the error so the user can find the
/// offending cell.
pub fn coerce_flag(value: &str, row: Option<usize>) -> Result<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    match trimmed.parse::<f64>() {
        Ok(numeric) if numeric == 0.0 => Ok(0),
        Ok(numeric) if numeric == 1.0 => Ok(1),
        _ => Err(PipelineError::InvalidFlag {
            value: trimmed.to_string(),
            row,
        }),
    }
}

/// Accept or reject a flag value typed during annotation.
///
/// Returns the trimmed value to store. The accepted alphabet is exactly
/// `""`, `"0"`, `"1"`; anything else is rejected so the table stays
/// unmodified.
pub fn check_flag_edit(input: &str) -> Result<String> {
    let trimmed = input.trim();
    match trimmed {
        "" | "0" | "1" => Ok(trimmed.to_string()),
        other => Err(PipelineError::InvalidFlag {
            value: other.to_string(),
            row: None,
        }),
    }
}
