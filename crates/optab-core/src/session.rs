//! Session state for one annotation run.

use std::io::Read;
use std::path::Path;

use optab_ingest::{decode_annotated_csv, decode_raw_export};
use optab_model::{AggregateSummary, ExpandSummary, PipelineError, Result, TF, Table};
use optab_output::{delivery_file_name, encode_csv};
use optab_transform::{aggregate, check_flag_edit, expand_comments};
use optab_validate::{check_annotation_complete, validate_schema};

/// A generated downloadable payload.
///
/// Owned by the [`Session`]; generating a new payload drops the previous
/// one, so repeated runs never accumulate buffers.
#[derive(Debug, Clone)]
pub struct Delivery {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Pipeline state between discrete operations.
///
/// Every mutating operation is commit-on-success: it computes its full
/// result before touching the session, so a failure leaves the previously
/// committed table (and payload) active.
#[derive(Debug, Default)]
pub struct Session {
    source_name: String,
    table: Option<Table>,
    delivery: Option<Delivery>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently committed table, if any.
    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    /// The most recently generated payload, if any.
    pub fn delivery(&self) -> Option<&Delivery> {
        self.delivery.as_ref()
    }

    /// Stage 1: decode a tab-delimited raw export, validate its schema, and
    /// expand the multi-value comment cells.
    pub fn load_raw_export(&mut self, file_name: &str, text: &str) -> Result<ExpandSummary> {
        let decoded = decode_raw_export(text)?;
        validate_schema(&decoded.columns)?;
        let (expanded, summary) = expand_comments(&decoded);
        tracing::info!(
            file_name,
            rows = summary.output_rows,
            "loaded raw export"
        );
        self.source_name = file_name.to_string();
        self.table = Some(expanded);
        Ok(summary)
    }

    /// Stage 2 offline path: re-import an annotated CSV sheet.
    ///
    /// Unlike stage 1 there is no schema auto-repair: the header must match
    /// the required 13 columns exactly.
    pub fn load_annotated<R: Read>(&mut self, file_name: &str, reader: R) -> Result<usize> {
        let decoded = decode_annotated_csv(reader)?;
        validate_schema(&decoded.columns)?;
        let rows = decoded.row_count();
        tracing::info!(file_name, rows, "loaded annotated sheet");
        self.source_name = file_name.to_string();
        self.table = Some(decoded);
        Ok(rows)
    }

    /// Stage 2 offline path, reading from a file.
    pub fn load_annotated_file(&mut self, path: &Path) -> Result<usize> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file = std::fs::File::open(path)?;
        self.load_annotated(&file_name, file)
    }

    /// Set one row's `tf` cell from annotation input.
    ///
    /// Accepts only `""`, `"0"`, or `"1"` (after trim); rejection leaves the
    /// table unmodified.
    pub fn edit_flag(&mut self, row_idx: usize, input: &str) -> Result<()> {
        let value = check_flag_edit(input)?;
        let table = self.table.as_mut().ok_or(PipelineError::NoActiveTable)?;
        // Committed tables always carry tf: the raw decoder appends it and
        // the annotated path enforces the full schema.
        let Some(tf_idx) = table.column_index(TF) else {
            return Err(PipelineError::NoActiveTable);
        };
        let row_count = table.row_count();
        let row = table
            .rows
            .get_mut(row_idx)
            .ok_or(PipelineError::RowOutOfRange { row_idx, row_count })?;
        row[tf_idx] = value;
        Ok(())
    }

    /// Remove one row from the table.
    pub fn delete_row(&mut self, row_idx: usize) -> Result<()> {
        let table = self.table.as_mut().ok_or(PipelineError::NoActiveTable)?;
        let row_count = table.row_count();
        if row_idx >= row_count {
            return Err(PipelineError::RowOutOfRange { row_idx, row_count });
        }
        table.rows.remove(row_idx);
        Ok(())
    }

    /// Export the current table as a BOM-prefixed CSV sheet for offline
    /// annotation. Replaces the owned payload.
    pub fn export_annotation_sheet(&mut self) -> Result<&Delivery> {
        let table = self.table.as_ref().ok_or(PipelineError::NoActiveTable)?;
        let bytes = encode_csv(table)?;
        let file_name = format!("{}-annotation.csv", base_name(&self.source_name));
        Ok(self.delivery.insert(Delivery { file_name, bytes }))
    }

    /// Stage 2: gate on annotation completeness, aggregate, and encode the
    /// delivery CSV. Replaces the owned payload.
    pub fn aggregate_to_delivery(&mut self) -> Result<AggregateSummary> {
        let table = self.table.as_ref().ok_or(PipelineError::NoActiveTable)?;
        check_annotation_complete(table)?;
        let (output, summary) = aggregate(table)?;
        let bytes = encode_csv(&output)?;
        let file_name = delivery_file_name(&self.source_name);
        tracing::info!(
            file_name,
            groups_total = summary.groups_total,
            groups_emitted = summary.groups_emitted,
            "generated delivery payload"
        );
        self.delivery = Some(Delivery { file_name, bytes });
        Ok(summary)
    }
}

fn base_name(original: &str) -> &str {
    match original.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => original,
    }
}
