use crate::ui::browser::{PageControlKind, PaginationView};
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// `‹ Previous  1  [2]  3  Next ›`, centered. Draws nothing when the view
/// has no pages.
pub struct PaginationBar<'a> {
    view: &'a PaginationView,
}

impl<'a> PaginationBar<'a> {
    pub fn new(view: &'a PaginationView) -> Self {
        Self { view }
    }

    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.view.controls.len() * 2);
        for control in &self.view.controls {
            let style = if control.active {
                Style::default()
                    .fg(ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if control.enabled {
                Style::default().fg(HEADER_TEXT)
            } else {
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
            };

            let text = match control.kind {
                PageControlKind::Previous => format!("‹ {}", control.label()),
                PageControlKind::Next => format!("{} ›", control.label()),
                PageControlKind::Page(_) => format!(" {} ", control.label()),
            };
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("  "));
        }
        spans.pop();
        Line::from(spans)
    }
}

impl Widget for PaginationBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.view.is_empty() {
            return;
        }
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
