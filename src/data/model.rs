use std::collections::{BTreeMap, HashSet};

// ---------------------------------------------------------------------------
// Record – one row of the population CSV
// ---------------------------------------------------------------------------

/// Columns offered as filters in the side panel.
pub const FILTER_FIELDS: [&str; 4] = ["State", "Model Year", "Make", "City"];

/// A single dataset row: column name → raw text value.
///
/// Values are kept exactly as they appear in the file. "Model Year" is
/// compared as text, never as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub fields: BTreeMap<String, String>,
}

impl Record {
    /// Value of `field`, or `None` if the row has no such column.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// Metric – the column aggregated for charting
// ---------------------------------------------------------------------------

/// The column whose distinct values are counted for the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Metric {
    #[default]
    ElectricVehicleType,
    ModelYear,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::ElectricVehicleType, Metric::ModelYear];

    /// Column name in the source CSV.
    pub fn column(self) -> &'static str {
        match self {
            Metric::ElectricVehicleType => "Electric Vehicle Type",
            Metric::ModelYear => "Model Year",
        }
    }
}

// ---------------------------------------------------------------------------
// EvDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed filter options.
#[derive(Debug, Clone)]
pub struct EvDataset {
    /// All records (rows).
    pub records: Vec<Record>,
    /// Column names in header order.
    pub column_names: Vec<String>,
    /// Distinct values per filter column, in first-occurrence order.
    ///
    /// Always derived from the full record set: options never narrow as
    /// other filters are applied.
    pub filter_options: BTreeMap<String, Vec<String>>,
}

impl Default for EvDataset {
    /// An empty dataset, indistinguishable from loading a header-only file:
    /// every filter column gets an (empty) options entry.
    fn default() -> Self {
        EvDataset::from_records(Vec::new(), Vec::new())
    }
}

impl EvDataset {
    /// Build the dataset and its filter options from loaded records.
    pub fn from_records(column_names: Vec<String>, records: Vec<Record>) -> Self {
        let mut filter_options = BTreeMap::new();
        for field in FILTER_FIELDS {
            filter_options.insert(field.to_string(), unique_values(&records, field));
        }
        EvDataset {
            records,
            column_names,
            filter_options,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Distinct non-empty values of `field` across `records`, ordered by first
/// occurrence (not sorted).
pub fn unique_values(records: &[Record], field: &str) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut values = Vec::new();
    for record in records {
        let Some(value) = record.get(field) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }
    values
}
