//! Plain-text rendering of the browser, used by `--dump`.

use std::fmt::Write as _;

use crate::ui::browser::{GridView, MovieBrowser, Notifier, PageControlKind, PaginationView};

/// Notifier for non-interactive runs: errors go to stderr, and are kept
/// so the caller can pick an exit status.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    errors: Vec<String>,
}

impl ConsoleNotifier {
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl Notifier for ConsoleNotifier {
    fn show_loading(&mut self) {
        tracing::debug!("loading indicator shown");
    }

    fn hide_loading(&mut self) {
        tracing::debug!("loading indicator hidden");
    }

    fn notify_error(&mut self, message: &str) {
        eprintln!("{message}");
        self.errors.push(message.to_string());
    }
}

pub fn render_grid_text(grid: &GridView) -> String {
    let mut out = String::new();
    for card in &grid.cards {
        let _ = writeln!(out, "{}", card.title);
        let _ = writeln!(out, "  {}", card.director_line);
        let _ = writeln!(out, "  {}", card.rating_line);
        if !card.tags.is_empty() {
            let _ = writeln!(out, "  Tags: {}", card.tags.join(", "));
        }
        let _ = writeln!(out, "  Image: {}", card.image);
        out.push('\n');
    }
    out
}

/// `< Previous | 1 | [2] | 3 | Next >`, with disabled ends in parentheses.
pub fn render_pagination_text(view: &PaginationView) -> String {
    view.controls
        .iter()
        .map(|control| {
            let label = match control.kind {
                PageControlKind::Previous => format!("< {}", control.label()),
                PageControlKind::Next => format!("{} >", control.label()),
                PageControlKind::Page(_) => control.label(),
            };
            if control.active {
                format!("[{label}]")
            } else if !control.enabled {
                format!("({label})")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_browser_text(browser: &MovieBrowser) -> String {
    let mut out = render_grid_text(&browser.grid());
    let pagination = render_pagination_text(&browser.pagination());
    if !pagination.is_empty() {
        out.push_str(&pagination);
        out.push('\n');
    }
    out
}
