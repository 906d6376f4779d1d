//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use moviegrid::catalog::Movie;
use moviegrid::ui::browser::{BrowserIntent, BrowserReducer, BrowserState, Notifier};
use moviegrid::ui::mvi::Reducer;

/// Notifier that records every call, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub calls: Vec<NotifierCall>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierCall {
    ShowLoading,
    HideLoading,
    Error(String),
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                NotifierCall::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show_loading(&mut self) {
        self.calls.push(NotifierCall::ShowLoading);
    }

    fn hide_loading(&mut self) {
        self.calls.push(NotifierCall::HideLoading);
    }

    fn notify_error(&mut self, message: &str) {
        self.calls.push(NotifierCall::Error(message.to_string()));
    }
}

/// Builds a record from a JSON literal.
pub fn movie(json: &str) -> Movie {
    serde_json::from_str(json).expect("invalid movie fixture")
}

pub fn numbered_movies(count: usize) -> Vec<Movie> {
    (1..=count).map(|i| Movie::new(format!("Movie {i}"))).collect()
}

pub fn loaded_state(movies: Vec<Movie>) -> BrowserState {
    BrowserReducer::reduce(BrowserState::default(), BrowserIntent::Loaded { movies })
}

pub fn titles(movies: &[Movie]) -> Vec<&str> {
    movies.iter().map(|m| m.title.as_str()).collect()
}
