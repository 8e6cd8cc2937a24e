use std::collections::HashMap;

use super::model::EvDataset;

// ---------------------------------------------------------------------------
// Group-count over the filtered records
// ---------------------------------------------------------------------------

/// One chart data point: a distinct metric value and how many filtered
/// records carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow {
    pub label: String,
    pub count: u64,
}

/// Count records per distinct value of `metric_field` among `indices`.
///
/// Rows come out in first-occurrence order of each value in the filtered
/// sequence (not alphabetical, not by count). Records whose metric value
/// is empty or missing are skipped entirely; there is no "empty" bucket.
pub fn aggregate(dataset: &EvDataset, indices: &[usize], metric_field: &str) -> Vec<AggregateRow> {
    let mut rows: Vec<AggregateRow> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for &idx in indices {
        let Some(value) = dataset.records[idx].get(metric_field) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        match slots.get(value) {
            Some(&slot) => rows[slot].count += 1,
            None => {
                slots.insert(value.to_string(), rows.len());
                rows.push(AggregateRow {
                    label: value.to_string(),
                    count: 1,
                });
            }
        }
    }
    rows
}
