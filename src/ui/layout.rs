use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen split, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub search: Rect,
    pub body: Rect,
    pub pagination: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);
    Regions {
        header: chunks[0],
        search: chunks[1],
        body: chunks[2],
        pagination: chunks[3],
        footer: chunks[4],
    }
}

/// Minimum width of a card when laid out side by side.
const MIN_CARD_WIDTH: u16 = 28;

/// Areas for `count` cards: a single row when wide enough, two columns
/// when moderately narrow, one column otherwise.
pub fn card_areas(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.width == 0 || area.height == 0 {
        return Vec::new();
    }

    let count_u16 = count as u16;
    let columns = if area.width >= MIN_CARD_WIDTH.saturating_mul(count_u16) {
        count_u16
    } else if area.width >= MIN_CARD_WIDTH * 2 {
        2.min(count_u16)
    } else {
        1
    };
    let rows = count_u16.div_ceil(columns);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Ratio(1, rows as u32)))
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
