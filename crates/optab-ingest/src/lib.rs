//! Decode boundary for the opinion-table pipeline.
//!
//! Two entry formats:
//!
//! - **raw**: the tab-delimited export produced upstream (stage 1 input)
//! - **annotated**: the CSV sheet this pipeline itself exports for offline
//!   annotation (stage 2 input)
//!
//! Both decoders share the same lossy-tolerance policy: a data row whose cell
//! count does not match the header is dropped, not repaired and not reported.

pub mod annotated;
pub mod raw;
mod scrub;

pub use annotated::{decode_annotated_csv, read_annotated_csv};
pub use raw::{decode_raw_export, read_raw_export};
