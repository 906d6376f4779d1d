use crate::catalog::{FetchError, Movie, MovieSource, SortCriterion};
use crate::ui::browser::intent::BrowserIntent;
use crate::ui::browser::reducer::BrowserReducer;
use crate::ui::browser::state::{BrowserState, PAGE_SIZE};
use crate::ui::browser::view::{render_grid, render_pagination, GridView, PaginationView};
use crate::ui::mvi::Reducer;

/// Busy indicator and alert capability provided by the host.
pub trait Notifier {
    fn show_loading(&mut self);
    fn hide_loading(&mut self);
    /// Blocking, user-acknowledged error message.
    fn notify_error(&mut self, message: &str);
}

/// The view-state controller: owns the fetched collection, the current
/// search/sort view and the current page.
#[derive(Debug, Default)]
pub struct MovieBrowser {
    state: BrowserState,
}

impl MovieBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: BrowserIntent) {
        tracing::debug!(?intent, "browser intent");
        BrowserReducer::dispatch(&mut self.state, intent);
    }

    /// Fetches the collection from `source` and settles the session's
    /// load outcome.
    pub async fn initialize<S, N>(&mut self, source: &S, notifier: &mut N)
    where
        S: MovieSource,
        N: Notifier + ?Sized,
    {
        self.begin_load(notifier);
        let result = source.fetch().await;
        self.finish_load(result, notifier);
    }

    pub fn begin_load<N: Notifier + ?Sized>(&mut self, notifier: &mut N) {
        notifier.show_loading();
    }

    pub fn finish_load<N: Notifier + ?Sized>(
        &mut self,
        result: Result<Vec<Movie>, FetchError>,
        notifier: &mut N,
    ) {
        notifier.hide_loading();
        match result {
            Ok(movies) => self.dispatch(BrowserIntent::Loaded { movies }),
            Err(err) => {
                let message = err.user_message();
                notifier.notify_error(&message);
                self.dispatch(BrowserIntent::LoadFailed { message });
            }
        }
    }

    pub fn search(&mut self, query: &str) {
        self.dispatch(BrowserIntent::Search {
            query: query.to_string(),
        });
    }

    pub fn sort(&mut self, criterion: SortCriterion) {
        self.dispatch(BrowserIntent::Sort { criterion });
    }

    pub fn set_page(&mut self, page: usize) {
        self.dispatch(BrowserIntent::GoToPage { page });
    }

    pub fn grid(&self) -> GridView {
        render_grid(&self.state.visible_movies, self.state.current_page, PAGE_SIZE)
    }

    pub fn pagination(&self) -> PaginationView {
        render_pagination(&self.state.visible_movies, self.state.current_page, PAGE_SIZE)
    }
}
