//! Validation for annotatable opinion tables.
//!
//! Two gates:
//!
//! - [`validate_schema`] checks the column list against the fixed 13-column
//!   contract before any table enters the pipeline;
//! - [`check_annotation_complete`] blocks aggregation until every `tf` cell
//!   holds exactly `0` or `1`.

pub mod flags;
pub mod schema;

pub use flags::check_annotation_complete;
pub use schema::validate_schema;
