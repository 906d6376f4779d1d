use crate::ui::app::{App, Popup};
use crate::ui::footer::{Footer, KeyContext};
use crate::ui::grid::GridWidget;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::pagination::PaginationBar;
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const SPINNER_FRAMES: [&str; 9] = ["⠁", "⠃", "⠇", "⠧", "⠷", "⠿", "⠻", "⠹", "⠸"];

const DETAIL_WIDTH: u16 = 64;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let state = app.browser().state();

    frame.render_widget(Header::new().widget(state), regions.header);
    frame.render_widget(search_bar(app), regions.search);

    if app.is_loading() {
        draw_loading(frame, regions.body, app);
    } else {
        let grid = app.grid();
        frame.render_widget(GridWidget::new(&grid, app.focused()), regions.body);
        let pagination = app.pagination();
        frame.render_widget(PaginationBar::new(&pagination), regions.pagination);
    }

    let popup = app.popup();
    let context = if app.is_loading() {
        KeyContext::Loading
    } else if popup.is_some() {
        KeyContext::Popup
    } else {
        KeyContext::Browsing
    };
    frame.render_widget(Footer::new(context).widget(regions.footer), regions.footer);

    match popup {
        Some(Popup::Alert(message)) => {
            let lines = vec![
                Line::from(Span::styled(message, Style::default().fg(HEADER_TEXT))),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter to dismiss",
                    Style::default().fg(MUTED_TEXT),
                )),
            ];
            PopupDialog::new("Error", lines)
                .border_color(STATUS_ERROR)
                .render(frame, regions.body);
        }
        Some(Popup::Detail(detail)) => {
            let lines = detail
                .lines()
                .into_iter()
                .map(|text| Line::from(Span::styled(text, Style::default().fg(HEADER_TEXT))))
                .collect();
            PopupDialog::new("Movie Details", lines)
                .fixed_width(DETAIL_WIDTH.min(regions.body.width))
                .render(frame, regions.body);
        }
        None => {}
    }
}

fn search_bar(app: &App) -> Paragraph<'static> {
    let line = if app.search_input().is_empty() {
        Line::from(vec![
            Span::styled(" 🔍 ", Style::default().fg(ACCENT)),
            Span::styled(
                "Search by title, genre or tag",
                Style::default().fg(MUTED_TEXT),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(" 🔍 ", Style::default().fg(ACCENT)),
            Span::styled(
                format!("{}▏", app.search_input()),
                Style::default().fg(HEADER_TEXT),
            ),
        ])
    };

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn draw_loading(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let spinner = SPINNER_FRAMES[app.spinner_frame() % SPINNER_FRAMES.len()];
    let lines = vec![
        Line::from(Span::styled(
            format!("{spinner} Loading movies"),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.source_url().to_string(),
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let target = centered_rect_by_size(area, width.saturating_add(4), 4);
    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, target);
}
