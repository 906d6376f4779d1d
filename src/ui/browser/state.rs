use crate::catalog::{Movie, SortCriterion};
use crate::ui::browser::view::total_pages;
use crate::ui::mvi::UiState;

/// Cards per page.
pub const PAGE_SIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    /// Terminal for the session; there is no retry.
    Failed { message: String },
}

/// Which transformation of the full collection is on screen.
///
/// Search and sort each start over from the full collection, so at most
/// one of them is ever in effect.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewMode {
    #[default]
    All,
    Searched { query: String },
    Sorted { criterion: SortCriterion },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    pub load: LoadStatus,
    /// Collection as fetched. Written once, when loading completes.
    pub all_movies: Vec<Movie>,
    pub visible_movies: Vec<Movie>,
    pub mode: ViewMode,
    /// 1-based.
    pub current_page: usize,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            load: LoadStatus::default(),
            all_movies: Vec::new(),
            visible_movies: Vec::new(),
            mode: ViewMode::default(),
            current_page: 1,
        }
    }
}

impl UiState for BrowserState {}

impl BrowserState {
    pub fn total_pages(&self) -> usize {
        total_pages(self.visible_movies.len(), PAGE_SIZE)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.load, LoadStatus::Loaded)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadStatus::Loading)
    }
}
