//! Serializable summaries returned by pipeline operations.

/// Result of expanding multi-value comment cells into one row per piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExpandSummary {
    pub input_rows: usize,
    pub output_rows: usize,
}

/// Result of one aggregation pass.
///
/// `groups_total` counts every group formed, including zero-sum groups that
/// were discarded; `groups_emitted` counts the surviving output records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AggregateSummary {
    pub groups_total: usize,
    pub groups_emitted: usize,
}
