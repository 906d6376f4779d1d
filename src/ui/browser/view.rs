//! What the grid and the pagination bar show, computed from state alone.
//!
//! Nothing here touches the terminal; the ratatui widgets in
//! `ui::grid` and `ui::pagination` only draw these descriptions.

use crate::catalog::Movie;
use crate::ui::browser::intent::BrowserIntent;

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Brings `page` into `1..=total_pages` (just `1` for an empty view).
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Full record shown by the "view more" affordance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDetail {
    pub title: String,
    pub director: String,
    pub duration: String,
    pub genre: String,
    pub release_date: String,
    pub cast: String,
}

impl CardDetail {
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            director: movie.director_label().to_string(),
            duration: movie.duration_label(),
            genre: movie.genre_label().to_string(),
            release_date: movie.release_date_label().to_string(),
            cast: movie.cast_label(),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("Title: {}", self.title),
            format!("Director: {}", self.director),
            format!("Duration: {}", self.duration),
            format!("Genre: {}", self.genre),
            format!("Release Date: {}", self.release_date),
            format!("Cast: {}", self.cast),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieCard {
    /// Index into the visible collection.
    pub position: usize,
    pub image: String,
    pub title: String,
    pub director_line: String,
    pub rating_line: String,
    pub tags: Vec<String>,
    pub detail: CardDetail,
}

impl MovieCard {
    pub fn from_movie(position: usize, movie: &Movie) -> Self {
        Self {
            position,
            image: movie.image_url().to_string(),
            title: movie.title.clone(),
            director_line: format!("Directed by: {}", movie.director_label()),
            rating_line: format!("Rating: ⭐ {}", movie.rating_label()),
            tags: movie.tags.clone(),
            detail: CardDetail::from_movie(movie),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridView {
    pub cards: Vec<MovieCard>,
}

impl GridView {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.cards.iter().map(|card| card.title.as_str()).collect()
    }
}

/// Cards for the records on `current_page`.
pub fn render_grid(movies: &[Movie], current_page: usize, page_size: usize) -> GridView {
    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    let cards = movies
        .iter()
        .enumerate()
        .skip(start)
        .take(page_size)
        .map(|(position, movie)| MovieCard::from_movie(position, movie))
        .collect();
    GridView { cards }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControlKind {
    Previous,
    Page(usize),
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub kind: PageControlKind,
    /// Page this control leads to.
    pub target: usize,
    pub enabled: bool,
    /// Set on the number of the page being shown.
    pub active: bool,
}

impl PageControl {
    pub fn label(&self) -> String {
        match self.kind {
            PageControlKind::Previous => "Previous".to_string(),
            PageControlKind::Page(number) => number.to_string(),
            PageControlKind::Next => "Next".to_string(),
        }
    }

    /// Intent emitted when the control is activated; disabled controls emit nothing.
    pub fn intent(&self) -> Option<BrowserIntent> {
        self.enabled
            .then_some(BrowserIntent::GoToPage { page: self.target })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaginationView {
    pub controls: Vec<PageControl>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl PaginationView {
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn previous(&self) -> Option<&PageControl> {
        self.find(|kind| matches!(kind, PageControlKind::Previous))
    }

    pub fn next(&self) -> Option<&PageControl> {
        self.find(|kind| matches!(kind, PageControlKind::Next))
    }

    pub fn page(&self, number: usize) -> Option<&PageControl> {
        self.find(|kind| kind == PageControlKind::Page(number))
    }

    fn find(&self, pred: impl Fn(PageControlKind) -> bool) -> Option<&PageControl> {
        self.controls.iter().find(|control| pred(control.kind))
    }
}

/// Previous, one control per page, Next; nothing at all for an empty view.
pub fn render_pagination(movies: &[Movie], current_page: usize, page_size: usize) -> PaginationView {
    let total = total_pages(movies.len(), page_size);
    if total == 0 {
        return PaginationView {
            controls: Vec::new(),
            current_page,
            total_pages: 0,
        };
    }

    let mut controls = Vec::with_capacity(total + 2);
    controls.push(PageControl {
        kind: PageControlKind::Previous,
        target: current_page.saturating_sub(1).max(1),
        enabled: current_page > 1,
        active: false,
    });
    controls.extend((1..=total).map(|number| PageControl {
        kind: PageControlKind::Page(number),
        target: number,
        enabled: true,
        active: number == current_page,
    }));
    controls.push(PageControl {
        kind: PageControlKind::Next,
        target: (current_page + 1).min(total),
        enabled: current_page < total,
        active: false,
    });

    PaginationView {
        controls,
        current_page,
        total_pages: total,
    }
}
