use crate::catalog::SortCriterion;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Nothing to interact with until the catalog arrives.
    if app.is_loading() {
        return;
    }

    if app.popup().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.close_popup();
        }
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.sort_by(SortCriterion::Rating);
        return;
    }
    if is_ctrl_char(key, 'd') {
        app.sort_by(SortCriterion::ReleaseDate);
        return;
    }
    if is_ctrl_char(key, 'g') {
        app.sort_by(SortCriterion::Genre);
        return;
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => app.push_page_digit(ch),
            _ => app.end_page_jump(),
        }
        return;
    }
    app.end_page_jump();

    match key.code {
        KeyCode::Left | KeyCode::PageUp => app.previous_page(),
        KeyCode::Right | KeyCode::PageDown => app.next_page(),
        KeyCode::Up => app.move_focus(-1),
        KeyCode::Down | KeyCode::Tab => app.move_focus(1),
        KeyCode::Enter => app.open_detail(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
