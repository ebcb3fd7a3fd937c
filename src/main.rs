use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use enrolldash::data::filter::filter;
use enrolldash::data::loader::load_file;
use enrolldash::data::model::{FilterCriteria, Metric};
use enrolldash::engine::{
    compare_terms, department_breakdown, department_trend, summarize, trend, DepartmentCount,
    DepartmentYearTotal, KpiSummary, TermComparison, TrendPoint,
};
use enrolldash::state::SessionState;

// ---------------------------------------------------------------------------
// CLI presentation shell
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "enrolldash")]
#[command(version, about = "Print enrollment dashboard aggregates as JSON")]
struct Cli {
    /// Enrollment data file (.csv or .json)
    path: PathBuf,

    /// Academic year to select (default: first observed year)
    #[arg(long)]
    year: Option<i32>,

    /// Term to select (default: first observed term)
    #[arg(long)]
    term: Option<String>,
}

/// Everything a dashboard page needs for one (year, term) selection,
/// serialized as a single JSON document.
#[derive(Serialize)]
struct DashboardView {
    criteria: FilterCriteria,
    kpis: KpiSummary,
    retention_trend: Vec<TrendPoint>,
    satisfaction_trend: Vec<TrendPoint>,
    department_breakdown: Vec<DepartmentCount>,
    term_comparison: Vec<TermComparison>,
    department_trend: Vec<DepartmentYearTotal>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let dataset = load_file(&args.path)
        .with_context(|| format!("loading {}", args.path.display()))?;
    if dataset.is_empty() {
        log::warn!("dataset is empty; all aggregates will be empty");
    }

    let mut state = SessionState::new(dataset);
    if let Some(year) = args.year {
        state.select_year(year);
    }
    if let Some(term) = args.term {
        state.select_term(term);
    }

    let dataset = state.dataset();
    let subset = filter(dataset, &state.criteria);
    log::debug!(
        "selection {:?} matched {} of {} records",
        state.criteria,
        subset.len(),
        dataset.len()
    );

    let view = DashboardView {
        criteria: state.criteria.clone(),
        kpis: summarize(&subset),
        retention_trend: trend(dataset, Metric::RetentionRate),
        satisfaction_trend: trend(dataset, Metric::Satisfaction),
        department_breakdown: department_breakdown(&subset),
        term_comparison: compare_terms(dataset),
        department_trend: department_trend(dataset),
    };

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
