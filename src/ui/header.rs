use crate::ui::browser::{BrowserState, LoadStatus, ViewMode};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &BrowserState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (status, status_style) = match &state.load {
            LoadStatus::Loading => ("Loading…".to_string(), text_style),
            LoadStatus::Loaded => (
                format!(
                    "{} of {} movies",
                    state.visible_movies.len(),
                    state.all_movies.len()
                ),
                text_style,
            ),
            LoadStatus::Failed { .. } => {
                ("Unavailable".to_string(), Style::default().fg(STATUS_ERROR))
            }
        };

        let line = Line::from(vec![
            Span::styled(
                "  moviegrid",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(mode_label(&state.mode), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

fn mode_label(mode: &ViewMode) -> String {
    match mode {
        ViewMode::All => "All movies".to_string(),
        ViewMode::Searched { query } if query.is_empty() => "All movies".to_string(),
        ViewMode::Searched { query } => format!("Search: \"{query}\""),
        ViewMode::Sorted { criterion } => format!("Sorted by {}", criterion.label()),
    }
}
