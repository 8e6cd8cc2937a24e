/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv
///     │
///     ▼
///  ┌──────────┐
///  │  loader   │  parse file → EvDataset
///  └──────────┘
///     │
///     ▼
///  ┌──────────┐
///  │ EvDataset │  Vec<Record>, filter options
///  └──────────┘
///     │
///     ▼
///  ┌──────────┐
///  │  filter   │  apply equality predicates → filtered indices
///  └──────────┘
///     │
///     ▼
///  ┌──────────┐
///  │ aggregate │  count by metric value → (label, count) rows
///  └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
