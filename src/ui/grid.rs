use crate::ui::browser::{GridView, MovieCard};
use crate::ui::layout::card_areas;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, TAG_BG,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// One movie card.
pub struct CardWidget<'a> {
    card: &'a MovieCard,
    focused: bool,
}

impl<'a> CardWidget<'a> {
    pub fn new(card: &'a MovieCard, focused: bool) -> Self {
        Self { card, focused }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let mut lines = vec![
            Line::from(Span::styled(
                self.card.image.as_str(),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(self.card.director_line.as_str(), text_style)),
            Line::from(Span::styled(self.card.rating_line.as_str(), text_style)),
        ];

        if !self.card.tags.is_empty() {
            let mut spans = Vec::with_capacity(self.card.tags.len() * 2);
            for tag in &self.card.tags {
                spans.push(Span::styled(
                    format!(" {tag} "),
                    Style::default().fg(HEADER_TEXT).bg(TAG_BG),
                ));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(spans));
        }

        let button_style = if self.focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("[ View More ]", button_style)));
        lines
    }
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, body_style) = if self.focused {
            (
                Style::default().fg(ACCENT),
                Style::default().bg(ACTIVE_HIGHLIGHT),
            )
        } else {
            (Style::default().fg(GLOBAL_BORDER), Style::default())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", self.card.title),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ));

        Paragraph::new(self.lines())
            .block(block)
            .style(body_style)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// The current page of cards, or a placeholder when there are none.
pub struct GridWidget<'a> {
    grid: &'a GridView,
    focused: usize,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a GridView, focused: usize) -> Self {
        Self { grid, focused }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.grid.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No movies to show",
                Style::default().fg(MUTED_TEXT),
            )))
            .alignment(Alignment::Center)
            .render(area, buf);
            return;
        }

        let areas = card_areas(area, self.grid.cards.len());
        for (index, (card, card_area)) in self.grid.cards.iter().zip(areas).enumerate() {
            CardWidget::new(card, index == self.focused).render(card_area, buf);
        }
    }
}
