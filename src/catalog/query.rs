use std::fmt;
use std::str::FromStr;

use crate::catalog::movie::{locale_compare, Movie};

/// Orderings offered by the sort selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    /// Highest rating first.
    Rating,
    /// Newest release first; unreadable dates last.
    ReleaseDate,
    /// Alphabetical by genre.
    Genre,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 3] = [Self::Rating, Self::ReleaseDate, Self::Genre];

    /// Wire name, as emitted by the selector.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rating => "rating",
            Self::ReleaseDate => "release_date",
            Self::Genre => "genre",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::ReleaseDate => "Release Date",
            Self::Genre => "Genre",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCriterion(pub String);

impl fmt::Display for UnknownCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort criterion '{}' (expected rating, release_date or genre)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCriterion {}

impl FromStr for SortCriterion {
    type Err = UnknownCriterion;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|criterion| criterion.as_str() == value)
            .ok_or_else(|| UnknownCriterion(value.to_string()))
    }
}

/// Records whose title, genre or tags contain `query`, ignoring case,
/// in their original order. An empty query keeps everything.
pub fn search_movies(movies: &[Movie], query: &str) -> Vec<Movie> {
    let needle = query.to_lowercase();
    movies
        .iter()
        .filter(|movie| movie.matches(&needle))
        .cloned()
        .collect()
}

/// A reordered copy of `movies`. Equal keys keep their input order.
pub fn sort_movies(movies: &[Movie], criterion: SortCriterion) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    match criterion {
        SortCriterion::Rating => {
            sorted.sort_by(|a, b| b.rating_value().total_cmp(&a.rating_value()));
        }
        SortCriterion::ReleaseDate => {
            // Option orders None below Some, so unreadable dates land last.
            sorted.sort_by_key(|movie| std::cmp::Reverse(movie.release_timestamp()));
        }
        SortCriterion::Genre => {
            sorted.sort_by(|a, b| locale_compare(a.genre_key(), b.genre_key()));
        }
    }
    sorted
}
