//! Aggregation engine for a university enrollment dashboard.
//!
//! Raw per-term enrollment records go in; filtered subsets, KPI totals,
//! grouped means, and long-format chart series come out. Rendering, chart
//! drawing, and narrative text are the caller's business; this crate only
//! produces the numbers, in a deterministic order a renderer can rely on.

pub mod data;
pub mod engine;
pub mod state;
