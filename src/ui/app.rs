use std::collections::VecDeque;

use crate::catalog::{FetchError, Movie, SortCriterion};
use crate::ui::browser::{
    BrowserIntent, CardDetail, GridView, MovieBrowser, Notifier, PaginationView,
};

/// Loading indicator and pending alerts shown by the terminal.
#[derive(Debug, Default)]
pub struct Notices {
    loading: bool,
    alerts: VecDeque<String>,
}

impl Notices {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }
}

impl Notifier for Notices {
    fn show_loading(&mut self) {
        self.loading = true;
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }

    fn notify_error(&mut self, message: &str) {
        self.alerts.push_back(message.to_string());
    }
}

/// Popups that take over the keyboard until closed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Popup {
    Alert(String),
    Detail(CardDetail),
}

pub struct App {
    should_quit: bool,
    browser: MovieBrowser,
    notices: Notices,
    search_input: String,
    /// Index of the focused card on the current page.
    focused: usize,
    detail: Option<CardDetail>,
    /// Digits typed so far for an Alt+digit page jump.
    page_digits: String,
    spinner_frame: usize,
    source_url: String,
}

impl App {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            browser: MovieBrowser::new(),
            notices: Notices::default(),
            search_input: String::new(),
            focused: 0,
            detail: None,
            page_digits: String::new(),
            spinner_frame: 0,
            source_url: source_url.into(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn browser(&self) -> &MovieBrowser {
        &self.browser
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn is_loading(&self) -> bool {
        self.notices.is_loading()
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    pub fn on_tick(&mut self) {
        if self.notices.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn begin_load(&mut self) {
        self.browser.begin_load(&mut self.notices);
    }

    pub fn on_catalog_loaded(&mut self, result: Result<Vec<Movie>, FetchError>) {
        self.browser.finish_load(result, &mut self.notices);
        self.focused = 0;
    }

    /// Alert first, then an open detail view.
    pub fn popup(&self) -> Option<Popup> {
        if let Some(message) = self.notices.current_alert() {
            return Some(Popup::Alert(message.to_string()));
        }
        self.detail.clone().map(Popup::Detail)
    }

    pub fn close_popup(&mut self) {
        if self.notices.current_alert().is_some() {
            self.notices.dismiss_alert();
        } else {
            self.detail = None;
        }
    }

    pub fn grid(&self) -> GridView {
        self.browser.grid()
    }

    pub fn pagination(&self) -> PaginationView {
        self.browser.pagination()
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_input.push(ch);
        self.emit_search();
    }

    pub fn pop_search_char(&mut self) {
        if self.search_input.pop().is_some() {
            self.emit_search();
        }
    }

    pub fn clear_search(&mut self) {
        if !self.search_input.is_empty() {
            self.search_input.clear();
            self.emit_search();
        }
    }

    fn emit_search(&mut self) {
        let query = self.search_input.clone();
        self.dispatch(BrowserIntent::Search { query });
    }

    /// Sorting starts over from the full collection, so the search box empties.
    pub fn sort_by(&mut self, criterion: SortCriterion) {
        self.search_input.clear();
        self.dispatch(BrowserIntent::Sort { criterion });
    }

    pub fn previous_page(&mut self) {
        if let Some(intent) = self.pagination().previous().and_then(|c| c.intent()) {
            self.dispatch(intent);
        }
    }

    pub fn next_page(&mut self) {
        if let Some(intent) = self.pagination().next().and_then(|c| c.intent()) {
            self.dispatch(intent);
        }
    }

    pub fn go_to_page(&mut self, number: usize) {
        if let Some(intent) = self.pagination().page(number).and_then(|c| c.intent()) {
            self.dispatch(intent);
        }
    }

    /// Extends the pending page number with `digit` and jumps there.
    ///
    /// Consecutive digits build multi-digit pages (`1`, `2` reaches page 12
    /// when it exists); a digit that would point past the last page starts
    /// a new number instead.
    pub fn push_page_digit(&mut self, digit: char) {
        self.page_digits.push(digit);
        if self.existing_page(&self.page_digits).is_none() {
            self.page_digits = digit.to_string();
        }
        match self.existing_page(&self.page_digits) {
            Some(number) => self.go_to_page(number),
            None => self.page_digits.clear(),
        }
    }

    pub fn end_page_jump(&mut self) {
        self.page_digits.clear();
    }

    fn existing_page(&self, digits: &str) -> Option<usize> {
        let number = digits.parse::<usize>().ok()?;
        self.pagination().page(number).map(|_| number)
    }

    pub fn move_focus(&mut self, delta: isize) {
        let count = self.grid().cards.len();
        if count == 0 {
            self.focused = 0;
            return;
        }
        let next = self.focused as isize + delta;
        self.focused = next.clamp(0, count as isize - 1) as usize;
    }

    /// "View more" on the focused card.
    pub fn open_detail(&mut self) {
        let grid = self.grid();
        if let Some(card) = grid.cards.get(self.focused) {
            self.detail = Some(card.detail.clone());
        }
    }

    fn dispatch(&mut self, intent: BrowserIntent) {
        self.browser.dispatch(intent);
        self.focused = 0;
    }
}
