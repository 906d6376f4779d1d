use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the keyboard currently drives; picks the hint line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    Loading,
    Browsing,
    Popup,
}

impl KeyContext {
    fn hints(self) -> &'static str {
        match self {
            KeyContext::Loading => " Ctrl+Q: Quit",
            KeyContext::Browsing => {
                " Type: Search │ ←/→: Page │ Alt+N: Go to Page │ ↑/↓: Select │ Enter: View More │ Ctrl+R/D/G: Sort by Rating/Date/Genre │ Ctrl+Q: Quit"
            }
            KeyContext::Popup => " Enter/Esc: Close │ Ctrl+Q: Quit",
        }
    }
}

pub struct Footer {
    context: KeyContext,
}

impl Footer {
    pub fn new(context: KeyContext) -> Self {
        Self { context }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.context.hints();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: the hints contain arrows and box glyphs
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
