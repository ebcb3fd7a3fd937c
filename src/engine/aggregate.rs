use serde::Serialize;

use crate::data::model::{Dataset, Metric, Record};
use crate::engine::groupby::{group_by, mean_of};

// ---------------------------------------------------------------------------
// KPI summary (filtered subset)
// ---------------------------------------------------------------------------

/// Headline totals for the currently filtered subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KpiSummary {
    pub total_applications: u64,
    pub total_admitted: u64,
    pub total_enrolled: u64,
}

/// Sum the count fields across the subset. An empty subset sums to zero
/// everywhere; it is a valid result, not an error.
pub fn summarize(subset: &[&Record]) -> KpiSummary {
    subset.iter().fold(KpiSummary::default(), |acc, rec| KpiSummary {
        total_applications: acc.total_applications + rec.applications,
        total_admitted: acc.total_admitted + rec.admitted,
        total_enrolled: acc.total_enrolled + rec.enrolled,
    })
}

// ---------------------------------------------------------------------------
// Trend aggregation (full dataset)
// ---------------------------------------------------------------------------

/// Mean of one metric for one (year, term) group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub year: i32,
    pub term: String,
    pub mean: f64,
}

/// Per-(year, term) mean of a percentage metric over the whole dataset.
///
/// Always computed over the full history regardless of any active filter.
/// Rows are ordered ascending by year; within a year, terms keep their
/// first-seen order (the sort is stable), so a line renderer can draw one
/// monotonic series per term.
pub fn trend(dataset: &Dataset, metric: Metric) -> Vec<TrendPoint> {
    let mut groups = group_by(dataset.records.iter(), |rec| (rec.year, rec.term.clone()));
    groups.sort_by_key(|((year, _), _)| *year);

    groups
        .into_iter()
        .map(|((year, term), members)| TrendPoint {
            year,
            term,
            mean: mean_of(&members, |rec| metric.value(rec)),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Department breakdown (filtered subset)
// ---------------------------------------------------------------------------

/// One (department, enrolled) pair in long format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    pub department: String,
    pub enrolled: u64,
}

/// Reshape the subset's per-department columns into long format for a
/// grouped-bar renderer: one row per (record, department) pair, record order
/// first, then department declaration order.
///
/// Deliberately a pure reshape. When a future filter matches several records,
/// each contributes its own rows; summing across records is the renderer's
/// decision, not this operation's.
pub fn department_breakdown(subset: &[&Record]) -> Vec<DepartmentCount> {
    subset
        .iter()
        .flat_map(|rec| rec.departments.iter())
        .map(|(department, enrolled)| DepartmentCount {
            department: department.clone(),
            enrolled: *enrolled,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Term comparison (full dataset)
// ---------------------------------------------------------------------------

/// Per-term means across all years, one row per distinct term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermComparison {
    pub term: String,
    pub mean_applications: f64,
    pub mean_admitted: f64,
    pub mean_enrolled: f64,
    pub mean_retention: f64,
    pub mean_satisfaction: f64,
}

/// Group the full dataset by term alone (collapsing years) and average the
/// five numeric fields per group. Rows follow first-seen term order.
pub fn compare_terms(dataset: &Dataset) -> Vec<TermComparison> {
    group_by(dataset.records.iter(), |rec| rec.term.clone())
        .into_iter()
        .map(|(term, members)| TermComparison {
            term,
            mean_applications: mean_of(&members, |rec| rec.applications as f64),
            mean_admitted: mean_of(&members, |rec| rec.admitted as f64),
            mean_enrolled: mean_of(&members, |rec| rec.enrolled as f64),
            mean_retention: mean_of(&members, |rec| rec.retention_rate),
            mean_satisfaction: mean_of(&members, |rec| rec.satisfaction),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Department trend by year (full dataset)
// ---------------------------------------------------------------------------

/// Total enrollment for one department in one year, in long format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentYearTotal {
    pub year: i32,
    pub department: String,
    pub enrolled: u64,
}

/// Group the full dataset by year, summing each department's enrollment
/// across that year's records (both terms). Rows are ordered ascending by
/// year, then by department declaration order, for a multi-series line
/// renderer.
pub fn department_trend(dataset: &Dataset) -> Vec<DepartmentYearTotal> {
    let mut groups = group_by(dataset.records.iter(), |rec| rec.year);
    groups.sort_by_key(|(year, _)| *year);

    groups
        .into_iter()
        .flat_map(|(year, members)| {
            dataset.departments.iter().map(move |department| {
                let enrolled = members
                    .iter()
                    .filter_map(|rec| rec.department_count(department))
                    .sum();
                DepartmentYearTotal {
                    year,
                    department: department.clone(),
                    enrolled,
                }
            })
        })
        .collect()
}
