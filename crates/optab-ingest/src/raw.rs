//! Decoder for the tab-delimited raw export.
//!
//! The export is plain text: rows separated by newline, cells by a literal
//! horizontal tab, no quoting. The first row is the header.

use std::path::Path;

use optab_model::{PipelineError, Result, TF, Table};

use crate::scrub::{normalize_cell, normalize_header};

/// Decode a raw export into a table.
///
/// Policy, in order:
/// - header cells are scrubbed, trimmed, and lowercased;
/// - blank lines are skipped;
/// - a data row whose cell count differs from the header is dropped silently;
/// - a missing `tf` column is appended with an empty cell per row;
/// - zero surviving data rows is an error.
pub fn decode_raw_export(text: &str) -> Result<Table> {
    let mut lines = text.lines();
    let columns: Vec<String> = lines
        .next()
        .unwrap_or("")
        .split('\t')
        .map(normalize_header)
        .collect();
    let expected = columns.len();

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut dropped = 0usize;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let row: Vec<String> = line.split('\t').map(normalize_cell).collect();
        if row.len() != expected {
            dropped += 1;
            continue;
        }
        rows.push(row);
    }
    if dropped > 0 {
        tracing::debug!(dropped, expected, "dropped rows with mismatched cell count");
    }

    let mut columns = columns;
    if !columns.iter().any(|column| column == TF) {
        tracing::debug!("tf column missing from export; appending it empty");
        columns.push(TF.to_string());
        for row in &mut rows {
            row.push(String::new());
        }
    }

    if rows.is_empty() {
        return Err(PipelineError::EmptyInput);
    }
    Ok(Table { columns, rows })
}

/// Read and decode a raw export file.
pub fn read_raw_export(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path)?;
    decode_raw_export(&text)
}
