//! Movie browser view state: the fetched collection, the active search or
//! sort, and the current page.

mod controller;
mod intent;
mod reducer;
mod state;
pub mod view;

pub use controller::{MovieBrowser, Notifier};
pub use intent::BrowserIntent;
pub use reducer::BrowserReducer;
pub use state::{BrowserState, LoadStatus, ViewMode, PAGE_SIZE};
pub use view::{
    render_grid, render_pagination, CardDetail, GridView, MovieCard, PageControl,
    PageControlKind, PaginationView,
};
