/// Aggregation engine: pure query/transform operations over a [`Dataset`].
///
/// Every operation borrows the dataset read-only, recomputes from scratch,
/// and returns plain structured values with no formatting or rendering
/// logic. The subset operations (KPI summary, department breakdown) take the
/// output of [`crate::data::filter::filter`]; the history operations (trend,
/// term comparison, department trend) always walk the full dataset so charts
/// show the complete history regardless of the active filter.
///
/// [`Dataset`]: crate::data::model::Dataset
pub mod aggregate;
pub mod groupby;

pub use aggregate::{
    compare_terms, department_breakdown, department_trend, summarize, trend, DepartmentCount,
    DepartmentYearTotal, KpiSummary, TermComparison, TrendPoint,
};
