//! End-to-end check: load a two-record 2020 dashboard CSV and verify every
//! engine operation against hand-computed results.

use std::io::Write;

use enrolldash::data::filter::filter;
use enrolldash::data::loader::load_file;
use enrolldash::data::model::{FilterCriteria, Metric};
use enrolldash::engine::{
    compare_terms, department_breakdown, department_trend, summarize, trend,
};
use enrolldash::state::SessionState;

const CSV: &str = "\
Year,Term,Applications,Admitted,Enrolled,Retention Rate (%),Student Satisfaction (%),Engineering Enrolled,Business Enrolled,Arts Enrolled,Science Enrolled
2020,Fall,100,80,60,90,85,20,15,10,15
2020,Spring,90,70,50,88,83,18,12,8,12
";

// Tests run in parallel threads; a per-test file name keeps one test's
// truncating create from racing another test's read.
fn load_fixture(name: &str) -> enrolldash::data::model::Dataset {
    let path = std::env::temp_dir().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(CSV.as_bytes()).unwrap();
    load_file(&path).unwrap()
}

#[test]
fn fall_2020_dashboard_numbers() {
    let ds = load_fixture("enrolldash_it_fall_2020.csv");

    let subset = filter(&ds, &FilterCriteria::new(2020, "Fall"));
    assert_eq!(subset.len(), 1);
    assert_eq!(subset[0].term, "Fall");

    let kpis = summarize(&subset);
    assert_eq!(kpis.total_applications, 100);
    assert_eq!(kpis.total_admitted, 80);
    assert_eq!(kpis.total_enrolled, 60);

    let breakdown = department_breakdown(&subset);
    let pairs: Vec<(&str, u64)> = breakdown
        .iter()
        .map(|row| (row.department.as_str(), row.enrolled))
        .collect();
    assert_eq!(
        pairs,
        vec![("Engineering", 20), ("Business", 15), ("Arts", 10), ("Science", 15)]
    );
}

#[test]
fn full_history_aggregates() {
    let ds = load_fixture("enrolldash_it_history.csv");

    // One record per (year, term) group: means are the raw values.
    let retention = trend(&ds, Metric::RetentionRate);
    assert_eq!(retention.len(), 2);
    assert_eq!((retention[0].term.as_str(), retention[0].mean), ("Fall", 90.0));
    assert_eq!((retention[1].term.as_str(), retention[1].mean), ("Spring", 88.0));

    let satisfaction = trend(&ds, Metric::Satisfaction);
    assert_eq!(satisfaction[0].mean, 85.0);
    assert_eq!(satisfaction[1].mean, 83.0);

    // One record per term: each comparison row mirrors its record.
    let comparison = compare_terms(&ds);
    assert_eq!(comparison.len(), 2);
    assert_eq!(comparison[0].term, "Fall");
    assert_eq!(comparison[0].mean_applications, 100.0);
    assert_eq!(comparison[0].mean_admitted, 80.0);
    assert_eq!(comparison[0].mean_enrolled, 60.0);
    assert_eq!(comparison[0].mean_retention, 90.0);
    assert_eq!(comparison[0].mean_satisfaction, 85.0);
    assert_eq!(comparison[1].term, "Spring");
    assert_eq!(comparison[1].mean_applications, 90.0);

    // Single year: department totals sum Fall and Spring.
    let by_year = department_trend(&ds);
    assert_eq!(by_year.len(), 4);
    assert!(by_year.iter().all(|row| row.year == 2020));
    let engineering = by_year.iter().find(|r| r.department == "Engineering").unwrap();
    assert_eq!(engineering.enrolled, 20 + 18);
}

#[test]
fn absent_selection_degrades_to_empty_results() {
    let ds = load_fixture("enrolldash_it_absent.csv");

    let subset = filter(&ds, &FilterCriteria::new(2021, "Fall"));
    assert!(subset.is_empty());
    assert_eq!(summarize(&subset).total_applications, 0);
    assert!(department_breakdown(&subset).is_empty());
}

#[test]
fn session_state_tracks_selection() {
    let ds = load_fixture("enrolldash_it_session.csv");
    let mut state = SessionState::new(ds);
    assert_eq!(state.criteria, FilterCriteria::new(2020, "Fall"));
    assert_eq!(state.selected_indices, vec![0]);

    state.select_term("Spring");
    assert_eq!(state.selected_indices, vec![1]);
}
