use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::catalog::ComponentRecord;
use crate::clipboard::ClipboardError;
use crate::ui::layout;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

pub fn handle_event<'c>(state: &mut AppState<'c>, event: AppEvent) -> Vec<Action<'c>> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.expire_notice(Instant::now());
            vec![]
        }
    }
}

/// Turn the clipboard outcome of a copy into a notice. View state is left
/// untouched either way.
pub fn report_copy(state: &mut AppState<'_>, component: &ComponentRecord, result: Result<(), ClipboardError>) {
    match result {
        Ok(()) => {
            tracing::info!(component = %component.id, "markup copied");
            state.notify(
                NoticeKind::Success,
                "Markup copied to clipboard!",
                format!("{} HTML copied successfully.", component.name),
            );
        }
        Err(e) => {
            tracing::warn!(component = %component.id, error = %e, "copy failed");
            state.notify(
                NoticeKind::Error,
                "Failed to copy markup",
                "Please try again or copy manually from the details view.",
            );
        }
    }
}

fn handle_terminal<'c>(state: &mut AppState<'c>, event: CEvent) -> Vec<Action<'c>> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(w, h) => {
            state.viewport = (w, h);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key<'c>(state: &mut AppState<'c>, key: KeyEvent) -> Vec<Action<'c>> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Detail modal captures all input when visible
    if state.view.is_detail_visible() {
        return handle_detail_key(state, key);
    }

    if key.code == KeyCode::Tab {
        state.cycle_focus();
        return vec![];
    }

    if key.code == KeyCode::Char('/') && state.focus != FocusPanel::Search {
        state.focus = FocusPanel::Search;
        return vec![];
    }

    match state.focus {
        FocusPanel::Sidebar => handle_sidebar_key(state, key),
        FocusPanel::Grid => handle_grid_key(state, key),
        FocusPanel::Search => handle_search_key(state, key),
    }
}

fn handle_detail_key<'c>(state: &mut AppState<'c>, key: KeyEvent) -> Vec<Action<'c>> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            state.close_detail();
            vec![]
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            state.toggle_detail_tab();
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.detail_scroll = state.detail_scroll.saturating_sub(1);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.detail_scroll = state.detail_scroll.saturating_add(1);
            vec![]
        }
        KeyCode::PageUp => {
            state.detail_scroll = state.detail_scroll.saturating_sub(10);
            vec![]
        }
        KeyCode::PageDown => {
            state.detail_scroll = state.detail_scroll.saturating_add(10);
            vec![]
        }
        KeyCode::Home => {
            state.detail_scroll = 0;
            vec![]
        }
        KeyCode::Char('c') | KeyCode::Char('y') => match state.view.selected_component() {
            Some(component) => vec![Action::CopyMarkup(component)],
            None => vec![],
        },
        _ => vec![],
    }
}

fn handle_sidebar_key<'c>(state: &mut AppState<'c>, key: KeyEvent) -> Vec<Action<'c>> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev_category();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next_category();
            vec![]
        }
        KeyCode::Home => {
            state.select_category_at(0);
            vec![]
        }
        KeyCode::End => {
            let len = state.view.categories().len();
            if len > 0 {
                state.select_category_at(len - 1);
            }
            vec![]
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            state.focus = FocusPanel::Grid;
            vec![]
        }
        KeyCode::Esc if state.view.is_search_active() => {
            state.clear_search();
            vec![]
        }
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_grid_key<'c>(state: &mut AppState<'c>, key: KeyEvent) -> Vec<Action<'c>> {
    let cols = layout::grid_columns(state.viewport.0, state.config.ui.card_width) as isize;
    let page = cols * layout::grid_rows(state.viewport.1) as isize;
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            if state.grid_cursor as isize % cols == 0 {
                state.focus = FocusPanel::Sidebar;
            } else {
                state.move_grid_cursor(-1);
            }
            vec![]
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.move_grid_cursor(1);
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if state.grid_cursor as isize >= cols {
                state.move_grid_cursor(-cols);
            }
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let len = state.view.displayed_components().len() as isize;
            if (state.grid_cursor as isize) + cols < len {
                state.move_grid_cursor(cols);
            }
            vec![]
        }
        KeyCode::PageUp => {
            state.move_grid_cursor(-page);
            vec![]
        }
        KeyCode::PageDown => {
            state.move_grid_cursor(page);
            vec![]
        }
        KeyCode::Home => {
            state.grid_cursor = 0;
            vec![]
        }
        KeyCode::End => {
            state.grid_cursor = state.view.displayed_components().len().saturating_sub(1);
            vec![]
        }
        KeyCode::Enter => {
            if let Some(component) = state.focused_component() {
                state.open_detail(component);
            }
            vec![]
        }
        KeyCode::Char('c') | KeyCode::Char('y') => match state.focused_component() {
            Some(component) => vec![Action::CopyMarkup(component)],
            None => vec![],
        },
        KeyCode::Esc if state.view.is_search_active() => {
            state.clear_search();
            vec![]
        }
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_search_key<'c>(state: &mut AppState<'c>, key: KeyEvent) -> Vec<Action<'c>> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('w') => {
                state.search.delete_word_back();
                state.sync_search();
            }
            KeyCode::Char('u') => state.clear_search(),
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Esc => {
            if state.search.text.is_empty() {
                state.focus = FocusPanel::Grid;
            } else {
                state.clear_search();
            }
        }
        KeyCode::Enter | KeyCode::Down => {
            state.focus = FocusPanel::Grid;
        }
        KeyCode::Backspace => {
            state.search.delete_back();
            state.sync_search();
        }
        KeyCode::Delete => {
            state.search.delete_forward();
            state.sync_search();
        }
        KeyCode::Left => state.search.move_left(),
        KeyCode::Right => state.search.move_right(),
        KeyCode::Home => state.search.move_home(),
        KeyCode::End => state.search.move_end(),
        KeyCode::Char(c) => {
            state.search.insert_char(c);
            state.sync_search();
        }
        _ => {}
    }
    vec![]
}
