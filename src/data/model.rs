use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record – one (year, term) enrollment snapshot
// ---------------------------------------------------------------------------

/// A single enrollment snapshot (one row of the source table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Academic year.
    pub year: i32,
    /// Term label (e.g. "Spring", "Fall"). Treated as an opaque category;
    /// the engine assumes the set of terms is finite and small, nothing more.
    pub term: String,
    pub applications: u64,
    pub admitted: u64,
    pub enrolled: u64,
    /// Retention rate as a percentage in [0, 100].
    pub retention_rate: f64,
    /// Student satisfaction as a percentage in [0, 100].
    pub satisfaction: f64,
    /// Per-department enrollment counts, in source column order.
    pub departments: Vec<(String, u64)>,
}

impl Record {
    /// Enrollment count for a named department, if the record carries it.
    pub fn department_count(&self, department: &str) -> Option<u64> {
        self.departments
            .iter()
            .find(|(name, _)| name == department)
            .map(|(_, count)| *count)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed value indexes.
///
/// Immutable after construction: every engine operation borrows it read-only
/// and recomputes its result on demand. The indexes let a presentation shell
/// offer only (year, term) values that actually occur, and give the
/// department columns a stable declaration order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records, in source order.
    pub records: Vec<Record>,
    /// Sorted unique years observed in the records.
    pub years: Vec<i32>,
    /// Unique terms, in first-seen order.
    pub terms: Vec<String>,
    /// Department names, in declaration (source column) order.
    pub departments: Vec<String>,
}

impl Dataset {
    /// Build the value indexes from loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut years: Vec<i32> = Vec::new();
        let mut terms: Vec<String> = Vec::new();
        let mut departments: Vec<String> = Vec::new();

        for rec in &records {
            if !years.contains(&rec.year) {
                years.push(rec.year);
            }
            if !terms.contains(&rec.term) {
                terms.push(rec.term.clone());
            }
            for (dept, _) in &rec.departments {
                if !departments.contains(dept) {
                    departments.push(dept.clone());
                }
            }
        }
        years.sort_unstable();

        Dataset {
            records,
            years,
            terms,
            departments,
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

// ---------------------------------------------------------------------------
// FilterCriteria – a (year, term) selection
// ---------------------------------------------------------------------------

/// A (year, term) pair selecting a subset of records. Built fresh per user
/// interaction; a pair absent from the dataset simply selects nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub year: i32,
    pub term: String,
}

impl FilterCriteria {
    pub fn new(year: i32, term: impl Into<String>) -> Self {
        FilterCriteria {
            year,
            term: term.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Metric – the percentage fields trend aggregation accepts
// ---------------------------------------------------------------------------

/// The numeric fields a trend can be computed over. A closed enum, so an
/// unrecognized field is a compile error rather than a silent wrong number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    RetentionRate,
    Satisfaction,
}

impl Metric {
    /// Extract this metric's value from a record.
    pub fn value(&self, record: &Record) -> f64 {
        match self {
            Metric::RetentionRate => record.retention_rate,
            Metric::Satisfaction => record.satisfaction,
        }
    }
}
