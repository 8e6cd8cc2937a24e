use crate::data::aggregate::{aggregate, AggregateRow};
use crate::data::filter::{filtered_indices, FilterState};
use crate::data::model::{EvDataset, Metric};

// ---------------------------------------------------------------------------
// Chart kind – presentation state machine
// ---------------------------------------------------------------------------

/// Which chart primitives render over the aggregate rows.
/// Pure presentation state: switching kinds never touches the data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartKind {
    #[default]
    All,
    Pie,
    Bar,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::All,
        ChartKind::Pie,
        ChartKind::Bar,
        ChartKind::Line,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::All => "All",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the startup load delivers).
    pub dataset: Option<EvDataset>,

    /// Per-column filter selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached, replaced
    /// wholesale on every filter change).
    pub visible_indices: Vec<usize>,

    /// Column aggregated for the charts.
    pub metric: Metric,

    /// Active chart rendering mode.
    pub chart_kind: ChartKind,

    /// Whether the startup load is still in flight.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            metric: Metric::default(),
            chart_kind: ChartKind::default(),
            loading: true,
        }
    }
}

impl AppState {
    /// Ingest the dataset delivered by the startup loader.
    pub fn set_dataset(&mut self, dataset: EvDataset) {
        self.filters = FilterState::default();
        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
        self.loading = false;
    }

    /// Current selection for a filter column; `""` means "All <field>".
    pub fn selected(&self, field: &str) -> &str {
        self.filters.get(field).map(String::as_str).unwrap_or("")
    }

    /// Set or clear one column's filter and recompute the visible set.
    pub fn set_filter(&mut self, field: &str, value: String) {
        if value.is_empty() {
            self.filters.remove(field);
        } else {
            self.filters.insert(field.to_string(), value);
        }
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
        }
    }

    /// Chart rows for the current (dataset, filters, metric).
    ///
    /// Derived on demand from scratch; never cached across state changes.
    pub fn chart_data(&self) -> Vec<AggregateRow> {
        match &self.dataset {
            Some(ds) => aggregate(ds, &self.visible_indices, self.metric.column()),
            None => Vec::new(),
        }
    }
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

    fn loaded_state() -> AppState {
        let records = vec![
            rec(&[("State", "CA"), ("Make", "Tesla"), ("Electric Vehicle Type", "BEV")]),
            rec(&[("State", "WA"), ("Make", "Nissan"), ("Electric Vehicle Type", "BEV")]),
            rec(&[("State", "CA"), ("Make", "Tesla"), ("Electric Vehicle Type", "PHEV")]),
        ];
        let dataset = EvDataset::from_records(
            vec!["State".into(), "Make".into(), "Electric Vehicle Type".into()],
            records,
        );
        let mut state = AppState::default();
        state.set_dataset(dataset);
        state
    }

    #[test]
    fn set_dataset_makes_everything_visible() {
        let state = loaded_state();
        assert!(!state.loading);
        assert_eq!(state.visible_indices, [0, 1, 2]);
    }

    #[test]
    fn set_filter_narrows_and_clearing_restores() {
        let mut state = loaded_state();

        state.set_filter("State", "CA".to_string());
        assert_eq!(state.visible_indices, [0, 2]);
        assert_eq!(state.selected("State"), "CA");

        state.set_filter("State", String::new());
        assert_eq!(state.visible_indices, [0, 1, 2]);
        assert_eq!(state.selected("State"), "");
    }

    #[test]
    fn chart_data_reflects_filters_and_metric() {
        let mut state = loaded_state();
        state.set_filter("State", "CA".to_string());

        state.metric = Metric::ElectricVehicleType;
        let labels: Vec<String> = state.chart_data().into_iter().map(|r| r.label).collect();
        assert_eq!(labels, ["BEV", "PHEV"]);
    }

    #[test]
    fn chart_kind_never_changes_chart_data() {
        let mut state = loaded_state();
        let before = state.chart_data();
        for kind in ChartKind::ALL {
            state.chart_kind = kind;
            assert_eq!(state.chart_data(), before);
        }
    }

    #[test]
    fn no_dataset_means_no_chart_data() {
        let state = AppState::default();
        assert!(state.loading);
        assert!(state.chart_data().is_empty());
    }
}
