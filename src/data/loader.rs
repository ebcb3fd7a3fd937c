use std::path::Path;

use anyhow::{bail, Context, Result};
use thiserror::Error;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Schema errors
// ---------------------------------------------------------------------------

/// A record that fails validation aborts the whole load. The engine assumes
/// a validated dataset and never re-checks these per call.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("row {row}: missing value for '{column}'")]
    MissingValue { row: usize, column: String },
    #[error("row {row}, column '{column}': '{value}' is not a non-negative integer")]
    InvalidCount {
        row: usize,
        column: String,
        value: String,
    },
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },
    #[error("row {row}, column '{column}': {value} is outside [0, 100]")]
    PercentOutOfRange {
        row: usize,
        column: String,
        value: f64,
    },
    #[error("row {row}: department counts sum to {sum} but only {enrolled} enrolled")]
    DepartmentOverflow { row: usize, sum: u64, enrolled: u64 },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an enrollment dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with named columns (see [`load_csv`])
/// * `.json` – records-oriented array matching the [`Record`] shape
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => bail!("Unsupported file extension: .{other}"),
    };

    log::info!(
        "loaded {} records ({} years, {} terms, {} departments)",
        dataset.len(),
        dataset.years.len(),
        dataset.terms.len(),
        dataset.departments.len()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Suffix marking a per-department enrollment column, e.g. `Engineering Enrolled`.
const DEPARTMENT_SUFFIX: &str = " Enrolled";

/// CSV layout: header row with named columns
/// `Year`, `Term`, `Applications`, `Admitted`, `Enrolled`,
/// `Retention Rate (%)`, `Student Satisfaction (%)`.
/// Every additional column ending in ` Enrolled` is a department column;
/// the department name is the part before the suffix. Department order
/// follows column order.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let col = |name: &str| -> Result<usize, SchemaError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
    };

    let year_idx = col("Year")?;
    let term_idx = col("Term")?;
    let applications_idx = col("Applications")?;
    let admitted_idx = col("Admitted")?;
    let enrolled_idx = col("Enrolled")?;
    let retention_idx = col("Retention Rate (%)")?;
    let satisfaction_idx = col("Student Satisfaction (%)")?;

    // Department columns: `<Name> Enrolled`, excluding the total `Enrolled`.
    let dept_cols: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, h)| *i != enrolled_idx && h.ends_with(DEPARTMENT_SUFFIX))
        .map(|(i, h)| (i, h[..h.len() - DEPARTMENT_SUFFIX.len()].to_string()))
        .collect();

    let mut records = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // 1-based data row, so messages match what a reader sees in the file
        // (header excluded).
        let row_no = idx + 1;
        let row = result.with_context(|| format!("CSV row {row_no}"))?;

        let year: i32 = field(&row, year_idx, row_no, "Year")?
            .parse()
            .map_err(|_| SchemaError::InvalidNumber {
                row: row_no,
                column: "Year".to_string(),
                value: row.get(year_idx).unwrap_or("").to_string(),
            })?;
        let term = field(&row, term_idx, row_no, "Term")?.to_string();

        let mut departments = Vec::with_capacity(dept_cols.len());
        for (idx, name) in &dept_cols {
            let column = format!("{name}{DEPARTMENT_SUFFIX}");
            let count = parse_count(field(&row, *idx, row_no, &column)?, row_no, &column)?;
            departments.push((name.clone(), count));
        }

        records.push(Record {
            year,
            term,
            applications: parse_count(
                field(&row, applications_idx, row_no, "Applications")?,
                row_no,
                "Applications",
            )?,
            admitted: parse_count(field(&row, admitted_idx, row_no, "Admitted")?, row_no, "Admitted")?,
            enrolled: parse_count(field(&row, enrolled_idx, row_no, "Enrolled")?, row_no, "Enrolled")?,
            retention_rate: parse_percent(
                field(&row, retention_idx, row_no, "Retention Rate (%)")?,
                row_no,
                "Retention Rate (%)",
            )?,
            satisfaction: parse_percent(
                field(&row, satisfaction_idx, row_no, "Student Satisfaction (%)")?,
                row_no,
                "Student Satisfaction (%)",
            )?,
            departments,
        });
    }

    validate(&records)?;
    Ok(Dataset::from_records(records))
}

/// A cell that is absent or blank counts as a missing value.
fn field<'a>(
    row: &'a csv::StringRecord,
    idx: usize,
    row_no: usize,
    column: &str,
) -> Result<&'a str, SchemaError> {
    match row.get(idx).map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(SchemaError::MissingValue {
            row: row_no,
            column: column.to_string(),
        }),
    }
}

fn parse_count(s: &str, row: usize, column: &str) -> Result<u64, SchemaError> {
    s.parse::<u64>().map_err(|_| SchemaError::InvalidCount {
        row,
        column: column.to_string(),
        value: s.to_string(),
    })
}

fn parse_percent(s: &str, row: usize, column: &str) -> Result<f64, SchemaError> {
    let value = s.parse::<f64>().map_err(|_| SchemaError::InvalidNumber {
        row,
        column: column.to_string(),
        value: s.to_string(),
    })?;
    check_percent(value, row, column)?;
    Ok(value)
}

fn check_percent(value: f64, row: usize, column: &str) -> Result<(), SchemaError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(SchemaError::PercentOutOfRange {
            row,
            column: column.to_string(),
            value,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "year": 2020,
///     "term": "Fall",
///     "applications": 100,
///     "admitted": 80,
///     "enrolled": 60,
///     "retention_rate": 90.0,
///     "satisfaction": 85.0,
///     "departments": [["Engineering", 20], ["Business", 15]]
///   },
///   ...
/// ]
/// ```
pub fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let records: Vec<Record> = serde_json::from_str(&text).context("parsing JSON records")?;
    validate(&records)?;
    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// Cross-field validation
// ---------------------------------------------------------------------------

/// Checks the invariants the engine relies on but no single field parse can
/// see: percentage bounds (JSON values skip the field parsers) and department
/// counts not exceeding the total enrollment.
fn validate(records: &[Record]) -> Result<(), SchemaError> {
    for (idx, rec) in records.iter().enumerate() {
        let row = idx + 1;
        check_percent(rec.retention_rate, row, "retention_rate")?;
        check_percent(rec.satisfaction, row, "satisfaction")?;

        let sum: u64 = rec.departments.iter().map(|(_, count)| count).sum();
        if sum > rec.enrolled {
            return Err(SchemaError::DepartmentOverflow {
                row,
                sum,
                enrolled: rec.enrolled,
            });
        }
    }
    Ok(())
}
