/// Data layer: table model, loading, column selection and alignment.
///
/// Architecture:
/// ```text
///   remote URL / uploaded .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch / parse CSV → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  ordered columns, uniform row count
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  select   │  column names → projection / single series
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  align    │  two series → equal-length prefixes
///   └──────────┘
/// ```

pub mod align;
pub mod loader;
pub mod model;
pub mod select;
