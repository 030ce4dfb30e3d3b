//! Data model for the opinion-annotation table pipeline.
//!
//! - **schema**: the fixed 13-column contract every accepted table must match
//! - **table**: the in-memory table handed between pipeline stages
//! - **error**: the pipeline error taxonomy with remediation messages
//! - **report**: serializable summaries returned by pipeline operations

pub mod error;
pub mod report;
pub mod schema;
pub mod table;

pub use error::{PipelineError, Result};
pub use report::{AggregateSummary, ExpandSummary};
pub use schema::{
    COMMENT_SEPARATOR, DONE_TIME, OPINION, RAW_COMMENTS, REQUIRED_COLUMNS, SENTIMENT_TAG, TF,
};
pub use table::Table;
