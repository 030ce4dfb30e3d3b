//! Transform stages for the opinion-table pipeline.
//!
//! - **expand**: fan one row into N rows by splitting the multi-value
//!   comment cell on its delimiter
//! - **flag**: normalize annotation flag cells to 0/1
//! - **aggregate**: collapse rows sharing a `(sentiment_tag, opinion)`
//!   identity into at most one output record, renaming `tf` to `done_time`

pub mod aggregate;
pub mod expand;
pub mod flag;

pub use aggregate::aggregate;
pub use expand::expand_comments;
pub use flag::{check_flag_edit, coerce_flag};
