//! Delivery encoding for the opinion-table pipeline.
//!
//! Output is UTF-8 CSV prefixed with a byte-order-mark so spreadsheet
//! applications pick the right encoding when the payload contains non-ASCII
//! comment text.

use std::path::Path;

use csv::WriterBuilder;

use optab_model::{Result, Table};

/// UTF-8 byte-order-mark prepended to every delivery payload.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Suffix appended to the delivery file name, extension included.
pub const DELIVERY_SUFFIX: &str = "-输出.csv";

/// Encode a table as a BOM-prefixed, comma-delimited CSV payload.
pub fn encode_csv(table: &Table) -> Result<Vec<u8>> {
    let mut bytes = Vec::from(UTF8_BOM);
    {
        let mut writer = WriterBuilder::new().from_writer(&mut bytes);
        writer.write_record(&table.columns)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }
    Ok(bytes)
}

/// Write a table as CSV to a file, BOM included.
pub fn write_csv(path: &Path, table: &Table) -> Result<()> {
    let bytes = encode_csv(table)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Derive the delivery file name from the uploaded file's name: the last
/// extension is stripped and the delivery suffix appended.
pub fn delivery_file_name(original: &str) -> String {
    let base = match original.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => original,
    };
    format!("{base}{DELIVERY_SUFFIX}")
}
