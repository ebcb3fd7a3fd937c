use crate::data::filter::filtered_indices;
use crate::data::model::{Dataset, FilterCriteria};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Per-session dashboard state, independent of rendering.
///
/// Owns the dataset for the process lifetime and the currently selected
/// (year, term) pair. The dataset is loaded once, never mutated, and passed
/// to the engine by reference; only the selection and the cached filtered
/// indices change between interactions.
pub struct SessionState {
    dataset: Dataset,

    /// Current (year, term) selection.
    pub criteria: FilterCriteria,

    /// Indices of records matching the current selection (cached).
    pub selected_indices: Vec<usize>,
}

impl SessionState {
    /// Ingest a loaded dataset, defaulting the selection to the first
    /// observed year and term.
    pub fn new(dataset: Dataset) -> Self {
        let criteria = FilterCriteria::new(
            dataset.years.first().copied().unwrap_or_default(),
            dataset.terms.first().cloned().unwrap_or_default(),
        );
        let selected_indices = filtered_indices(&dataset, &criteria);
        SessionState {
            dataset,
            criteria,
            selected_indices,
        }
    }

    /// Read-only view of the dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Change the selected year and recompute the subset.
    pub fn select_year(&mut self, year: i32) {
        self.criteria.year = year;
        self.refilter();
    }

    /// Change the selected term and recompute the subset.
    pub fn select_term(&mut self, term: impl Into<String>) {
        self.criteria.term = term.into();
        self.refilter();
    }

    /// Recompute `selected_indices` after a selection change.
    fn refilter(&mut self) {
        self.selected_indices = filtered_indices(&self.dataset, &self.criteria);
    }
}
