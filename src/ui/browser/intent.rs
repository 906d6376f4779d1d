use crate::catalog::{Movie, SortCriterion};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BrowserIntent {
    /// The startup fetch delivered the collection.
    Loaded { movies: Vec<Movie> },
    /// The startup fetch failed; `message` is what the user was shown.
    LoadFailed { message: String },
    /// Search text changed.
    Search { query: String },
    /// A sort criterion was chosen.
    Sort { criterion: SortCriterion },
    /// A pagination control was activated.
    GoToPage { page: usize },
}

impl Intent for BrowserIntent {}
