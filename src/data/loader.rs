use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use super::model::{EvDataset, Record};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Errors from reading the population CSV.
///
/// These stay inside the data layer: the startup path turns any of them
/// into an empty dataset plus a log line, never a user-facing error state.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("reading CSV headers: {0}")]
    Headers(#[source] csv::Error),
    #[error("CSV row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// Load the dataset from a comma-separated file with a header row.
///
/// Every cell is kept as text under its header-derived column name; no
/// type coercion happens here or anywhere downstream.
pub fn load_file(path: &Path) -> Result<EvDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| LoadError::Open {
        path: path.display().to_string(),
        source: e,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(LoadError::Headers)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut records = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let row = result.map_err(|e| LoadError::Row {
            row: row_no,
            source: e,
        })?;

        let mut fields = BTreeMap::new();
        for (col_idx, value) in row.iter().enumerate() {
            if let Some(name) = headers.get(col_idx) {
                fields.insert(name.clone(), value.to_string());
            }
        }
        records.push(Record { fields });
    }

    Ok(EvDataset::from_records(headers, records))
}

/// Startup entry point: a failed load yields zero records.
///
/// Filters then render with no options and the charts render empty; the
/// cause is only visible in the log.
pub fn load_or_empty(path: &Path) -> EvDataset {
    match load_file(path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} records from {} ({} columns)",
                dataset.len(),
                path.display(),
                dataset.column_names.len()
            );
            dataset
        }
        Err(e) => {
            log::warn!("Failed to load {}: {e}", path.display());
            EvDataset::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FILTER_FIELDS;

    fn write_fixture(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("ev-dash-{name}-{}.csv", std::process::id()));
        std::fs::write(&path, contents).expect("writing fixture CSV");
        path
    }

    #[test]
    fn loads_header_named_string_fields() {
        let path = write_fixture(
            "basic",
            "State,Model Year,Make,City,Electric Vehicle Type\n\
             WA,2020,TESLA,Seattle,Battery Electric Vehicle (BEV)\n\
             WA,2013,NISSAN,Olympia,Battery Electric Vehicle (BEV)\n",
        );
        let dataset = load_file(&path).expect("load");
        std::fs::remove_file(&path).ok();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.column_names.len(), 5);
        assert_eq!(dataset.records[0].get("Make"), Some("TESLA"));
        // Model Year stays text.
        assert_eq!(dataset.records[1].get("Model Year"), Some("2013"));
        assert_eq!(dataset.filter_options["City"], ["Seattle", "Olympia"]);
    }

    #[test]
    fn quoted_commas_stay_in_one_field() {
        let path = write_fixture(
            "quoted",
            "Make,Electric Vehicle Type\nKIA,\"Plug-in Hybrid Electric Vehicle (PHEV)\"\n",
        );
        let dataset = load_file(&path).expect("load");
        std::fs::remove_file(&path).ok();

        assert_eq!(
            dataset.records[0].get("Electric Vehicle Type"),
            Some("Plug-in Hybrid Electric Vehicle (PHEV)")
        );
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = load_file(Path::new("/nonexistent/ev.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn load_or_empty_swallows_failures() {
        let dataset = load_or_empty(Path::new("/nonexistent/ev.csv"));
        assert!(dataset.is_empty());
        for field in FILTER_FIELDS {
            assert!(dataset.filter_options[field].is_empty());
        }
    }

    #[test]
    fn header_only_file_yields_zero_records() {
        let path = write_fixture("empty", "State,Model Year,Make,City\n");
        let dataset = load_file(&path).expect("load");
        std::fs::remove_file(&path).ok();

        assert!(dataset.is_empty());
        assert_eq!(dataset.column_names.len(), 4);
    }
}
