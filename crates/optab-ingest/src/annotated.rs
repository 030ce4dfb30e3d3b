//! Decoder for the annotated CSV sheet (stage 2 offline path).
//!
//! The expected file is the sheet this pipeline exported for annotation:
//! header row first, comma-delimited, optionally BOM-prefixed. The header is
//! only normalized here; schema enforcement is the caller's job.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use optab_model::{PipelineError, Result, Table};

use crate::scrub::{normalize_cell, normalize_header};

/// Decode an annotated CSV from any reader.
pub fn decode_annotated_csv<R: Read>(reader: R) -> Result<Table> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = csv_reader.records();

    let Some(header) = records.next() else {
        return Err(PipelineError::EmptyInput);
    };
    let columns: Vec<String> = header?.iter().map(normalize_header).collect();
    let expected = columns.len();

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut dropped = 0usize;
    for record in records {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        if row.len() != expected {
            dropped += 1;
            continue;
        }
        rows.push(row);
    }
    if dropped > 0 {
        tracing::debug!(dropped, expected, "dropped rows with mismatched cell count");
    }

    if rows.is_empty() {
        return Err(PipelineError::EmptyInput);
    }
    Ok(Table { columns, rows })
}

/// Read and decode an annotated CSV file.
pub fn read_annotated_csv(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    decode_annotated_csv(file)
}
