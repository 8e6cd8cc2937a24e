use std::collections::BTreeMap;

use super::model::EvDataset;

// ---------------------------------------------------------------------------
// Filter predicate: one selected value per column
// ---------------------------------------------------------------------------

/// Per-column selection state: maps column_name → selected value.
/// An absent entry (or an empty string) means "no filter" for that column.
pub type FilterState = BTreeMap<String, String>;

/// Return indices of records that pass all active filters.
///
/// A record is retained iff, for every column with a non-empty selection,
/// its value equals the selection exactly (case-sensitive). This is a
/// conjunction across columns; a record missing an actively filtered
/// column does not match.
pub fn filtered_indices(dataset: &EvDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| {
            for (field, selected) in filters {
                if selected.is_empty() {
                    // "All <field>" → no constraint
                    continue;
                }
                if record.get(field) != Some(selected.as_str()) {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn rec(pairs: &[(&str, &str)]) -> Record {
        Record {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn dataset() -> EvDataset {
        let records = vec![
            rec(&[("State", "CA"), ("Make", "Tesla"), ("City", "Fresno")]),
            rec(&[("State", "WA"), ("Make", "Nissan"), ("City", "Seattle")]),
            rec(&[("State", "CA"), ("Make", "Tesla"), ("City", "Oakland")]),
            rec(&[("State", "WA"), ("Make", "Tesla"), ("City", "Seattle")]),
        ];
        EvDataset::from_records(
            vec!["State".into(), "Make".into(), "City".into()],
            records,
        )
    }

    #[test]
    fn no_filters_returns_every_index() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, &FilterState::new()), [0, 1, 2, 3]);
    }

    #[test]
    fn empty_selection_imposes_no_constraint() {
        let ds = dataset();
        let mut filters = FilterState::new();
        filters.insert("State".to_string(), String::new());
        assert_eq!(filtered_indices(&ds, &filters), [0, 1, 2, 3]);
    }

    #[test]
    fn active_filters_are_a_conjunction() {
        let ds = dataset();
        let mut filters = FilterState::new();
        filters.insert("State".to_string(), "WA".to_string());
        filters.insert("Make".to_string(), "Tesla".to_string());
        assert_eq!(filtered_indices(&ds, &filters), [3]);
    }

    #[test]
    fn retained_records_match_every_active_constraint() {
        let ds = dataset();
        let mut filters = FilterState::new();
        filters.insert("State".to_string(), "CA".to_string());

        let indices = filtered_indices(&ds, &filters);
        assert!(indices.iter().all(|&i| i < ds.len()));
        for &i in &indices {
            assert_eq!(ds.records[i].get("State"), Some("CA"));
        }
        assert_eq!(indices, [0, 2]);
    }

    #[test]
    fn equality_is_case_sensitive() {
        let ds = dataset();
        let mut filters = FilterState::new();
        filters.insert("State".to_string(), "ca".to_string());
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn record_missing_a_filtered_column_does_not_match() {
        let records = vec![rec(&[("Make", "Tesla")])];
        let ds = EvDataset::from_records(vec!["Make".into()], records);
        let mut filters = FilterState::new();
        filters.insert("State".to_string(), "CA".to_string());
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn zero_match_selection_yields_empty() {
        let ds = dataset();
        let mut filters = FilterState::new();
        filters.insert("City".to_string(), "Spokane".to_string());
        assert!(filtered_indices(&ds, &filters).is_empty());
    }
}
