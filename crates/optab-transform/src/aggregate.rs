//! Group aggregation and the `tf` → `done_time` rename.

use std::collections::HashMap;

use optab_model::{
    AggregateSummary, DONE_TIME, OPINION, RAW_COMMENTS, Result, SENTIMENT_TAG, TF, Table,
};

use crate::flag::coerce_flag;

/// Collapse rows sharing a `(sentiment_tag, opinion)` identity.
///
/// Groups whose coerced `tf` values sum to 0 are discarded entirely. Each
/// surviving group emits one record: a copy of its first member with the
/// group's merged comments (empty members dropped, the rest trimmed and
/// joined with `$`) in `raw_comments`. In the output columns `tf` is renamed
/// `done_time`.
///
/// Note that `done_time` keeps the first member's original `tf` value; the
/// group sum only decides survival.
pub fn aggregate(table: &Table) -> Result<(Table, AggregateSummary)> {
    let tag_idx = table.column_index(SENTIMENT_TAG);
    let opinion_idx = table.column_index(OPINION);
    let tf_idx = table.column_index(TF);
    let comments_idx = table.column_index(RAW_COMMENTS);

    // First-occurrence order, for deterministic output.
    let mut key_order: Vec<String> = Vec::new();
    let mut members: HashMap<String, Vec<usize>> = HashMap::new();
    for (row_idx, row) in table.rows.iter().enumerate() {
        let key = format!("{}_{}", field(row, tag_idx), field(row, opinion_idx));
        members
            .entry(key.clone())
            .or_insert_with(|| {
                key_order.push(key);
                Vec::new()
            })
            .push(row_idx);
    }

    let mut columns = table.columns.clone();
    if let Some(tf_idx) = tf_idx {
        columns[tf_idx] = DONE_TIME.to_string();
    }
    let mut output = Table::new(columns);

    for key in &key_order {
        let group = &members[key];
        let mut sum = 0i64;
        for &row_idx in group {
            let value = field(&table.rows[row_idx], tf_idx);
            sum += coerce_flag(value, Some(row_idx + 2))?;
        }
        if sum == 0 {
            continue;
        }

        let merged: Vec<&str> = group
            .iter()
            .map(|&row_idx| field(&table.rows[row_idx], comments_idx).trim())
            .filter(|piece| !piece.is_empty())
            .collect();

        let mut record = table.rows[group[0]].clone();
        if let Some(comments_idx) = comments_idx {
            record[comments_idx] = merged.join("$");
        }
        output.push_row(record);
    }

    let summary = AggregateSummary {
        groups_total: key_order.len(),
        groups_emitted: output.row_count(),
    };
    tracing::debug!(
        groups_total = summary.groups_total,
        groups_emitted = summary.groups_emitted,
        "aggregated annotated rows"
    );
    Ok((output, summary))
}

fn field(row: &[String], idx: Option<usize>) -> &str {
    idx.and_then(|idx| row.get(idx)).map_or("", String::as_str)
}
