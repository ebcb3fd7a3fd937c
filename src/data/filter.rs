use super::model::{Dataset, FilterCriteria, Record};

// ---------------------------------------------------------------------------
// (year, term) subset selection
// ---------------------------------------------------------------------------

/// Return the records matching both the year and the term of `criteria`,
/// in original dataset order.
///
/// A (year, term) pair that occurs nowhere in the dataset yields an empty
/// subset, never an error; the engine has no authority to reject values it
/// was not asked to validate.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a Record> {
    dataset
        .records
        .iter()
        .filter(|rec| rec.year == criteria.year && rec.term == criteria.term)
        .collect()
}

/// Like [`filter`], but returns positions into `dataset.records`. Useful for
/// shells that keep selections as indices rather than borrows.
pub fn filtered_indices(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| rec.year == criteria.year && rec.term == criteria.term)
        .map(|(i, _)| i)
        .collect()
}
