use crate::catalog::{search_movies, sort_movies};
use crate::ui::browser::intent::BrowserIntent;
use crate::ui::browser::state::{BrowserState, LoadStatus, ViewMode};
use crate::ui::browser::view::clamp_page;
use crate::ui::mvi::Reducer;

pub struct BrowserReducer;

impl Reducer for BrowserReducer {
    type State = BrowserState;
    type Intent = BrowserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowserIntent::Loaded { movies } => match state.load {
                LoadStatus::Loading => BrowserState {
                    load: LoadStatus::Loaded,
                    visible_movies: movies.clone(),
                    all_movies: movies,
                    mode: ViewMode::All,
                    current_page: 1,
                },
                // The collection is fixed once the session has an outcome.
                _ => state,
            },
            BrowserIntent::LoadFailed { message } => match state.load {
                LoadStatus::Loading => BrowserState {
                    load: LoadStatus::Failed { message },
                    ..BrowserState::default()
                },
                _ => state,
            },
            BrowserIntent::Search { query } => {
                if !state.is_loaded() {
                    return state;
                }
                let visible_movies = search_movies(&state.all_movies, &query);
                BrowserState {
                    visible_movies,
                    mode: ViewMode::Searched { query },
                    current_page: 1,
                    ..state
                }
            }
            BrowserIntent::Sort { criterion } => {
                if !state.is_loaded() {
                    return state;
                }
                let visible_movies = sort_movies(&state.all_movies, criterion);
                BrowserState {
                    visible_movies,
                    mode: ViewMode::Sorted { criterion },
                    current_page: 1,
                    ..state
                }
            }
            BrowserIntent::GoToPage { page } => {
                let current_page = clamp_page(page, state.total_pages());
                BrowserState {
                    current_page,
                    ..state
                }
            }
        }
    }
}
