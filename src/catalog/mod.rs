//! The movie catalog: record schema, search/sort over records, and the
//! remote source the collection is fetched from.

mod movie;
mod query;
mod source;

pub use movie::{locale_compare, Movie, NumberLike, NOT_AVAILABLE, PLACEHOLDER_IMAGE};
pub use query::{search_movies, sort_movies, SortCriterion, UnknownCriterion};
pub use source::{parse_catalog, FetchError, HttpMovieSource, MovieSource};
