//! The fixed column contract for annotatable opinion tables.
//!
//! Validation compares by index, not by set membership: a table with all 13
//! names in the wrong order is rejected.

/// The 13 required column names, in the required order.
pub const REQUIRED_COLUMNS: [&str; 13] = [
    "part_time",
    "firstcategoryname",
    "name",
    "cid",
    "sentiment_tag",
    "begin_time",
    "end_time",
    "index_",
    "opinion",
    "score",
    "num",
    "raw_comments",
    "tf",
];

/// Half of the composite group key.
pub const SENTIMENT_TAG: &str = "sentiment_tag";

/// The other half of the composite group key.
pub const OPINION: &str = "opinion";

/// Multi-value comment cell, split on [`COMMENT_SEPARATOR`] during expansion
/// and re-joined with it during aggregation.
pub const RAW_COMMENTS: &str = "raw_comments";

/// Annotation flag column; cells must be normalized to 0 or 1 before
/// aggregation.
pub const TF: &str = "tf";

/// Name the `tf` column is renamed to in the delivery table.
pub const DONE_TIME: &str = "done_time";

/// Delimiter between comment pieces inside a single `raw_comments` cell.
pub const COMMENT_SEPARATOR: char = '$';
