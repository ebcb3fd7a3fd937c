/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, value indexes
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply (year, term) criteria → subset
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
