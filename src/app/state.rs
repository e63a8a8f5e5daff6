use crate::app::view::ViewState;
use crate::catalog::{Catalog, ComponentRecord};
use crate::config::AppConfig;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// Display width of the text before the cursor.
    pub fn cursor_column(&self) -> usize {
        unicode_width::UnicodeWidthStr::width(&self.text[..self.cursor])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Sidebar,
    Grid,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailTab {
    Markup,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient toast shown after a copy.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
    pub shown_at: Instant,
}

pub struct AppState<'c> {
    pub config: AppConfig,
    pub view: ViewState<'c>,
    pub search: InputState,
    pub focus: FocusPanel,
    /// Index into `view.displayed_components()`.
    pub grid_cursor: usize,
    pub detail_tab: DetailTab,
    pub detail_scroll: u16,
    pub notice: Option<Notice>,
    /// Last known terminal size, used for grid navigation.
    pub viewport: (u16, u16),
    pub should_quit: bool,
    pub dirty: bool,
}

impl<'c> AppState<'c> {
    pub fn new(catalog: &'c Catalog, config: AppConfig) -> Self {
        let view = ViewState::new(catalog, config.ui.initial_category.clone());
        Self {
            config,
            view,
            search: InputState::new(),
            focus: FocusPanel::Grid,
            grid_cursor: 0,
            detail_tab: DetailTab::Markup,
            detail_scroll: 0,
            notice: None,
            viewport: (80, 24),
            should_quit: false,
            dirty: true,
        }
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Sidebar => FocusPanel::Grid,
            FocusPanel::Grid => FocusPanel::Search,
            FocusPanel::Search => FocusPanel::Sidebar,
        };
        self.dirty = true;
    }

    /// Push the search box text to the view and restart grid navigation.
    pub fn sync_search(&mut self) {
        self.view.set_search_query(self.search.text.clone());
        self.grid_cursor = 0;
        self.dirty = true;
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.sync_search();
    }

    /// Position of the selected category in the sidebar, if it is listed.
    pub fn selected_category_index(&self) -> Option<usize> {
        let selected = self.view.selected_category_id();
        self.view.categories().iter().position(|c| c.id == selected)
    }

    pub fn select_category_at(&mut self, index: usize) {
        if let Some(category) = self.view.categories().get(index) {
            self.view.select_category(category.id.clone());
            self.grid_cursor = 0;
            self.dirty = true;
        }
    }

    pub fn select_next_category(&mut self) {
        let len = self.view.categories().len();
        if len == 0 {
            return;
        }
        let next = match self.selected_category_index() {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.select_category_at(next);
    }

    pub fn select_prev_category(&mut self) {
        let len = self.view.categories().len();
        if len == 0 {
            return;
        }
        let prev = match self.selected_category_index() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.select_category_at(prev);
    }

    pub fn focused_component(&self) -> Option<&'c ComponentRecord> {
        self.view.displayed_components().get(self.grid_cursor).copied()
    }

    /// Move the grid cursor by `delta` cards, clamped to the list.
    pub fn move_grid_cursor(&mut self, delta: isize) {
        let len = self.view.displayed_components().len();
        if len == 0 {
            self.grid_cursor = 0;
            return;
        }
        let target = self.grid_cursor as isize + delta;
        self.grid_cursor = target.clamp(0, len as isize - 1) as usize;
        self.dirty = true;
    }

    pub fn open_detail(&mut self, component: &'c ComponentRecord) {
        self.view.open_detail(component);
        self.detail_tab = DetailTab::Markup;
        self.detail_scroll = 0;
        self.dirty = true;
    }

    pub fn close_detail(&mut self) {
        self.view.close_detail();
        self.dirty = true;
    }

    pub fn toggle_detail_tab(&mut self) {
        self.detail_tab = match self.detail_tab {
            DetailTab::Markup => DetailTab::Notes,
            DetailTab::Notes => DetailTab::Markup,
        };
        self.detail_scroll = 0;
        self.dirty = true;
    }

    pub fn notify(&mut self, kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            title: title.into(),
            description: description.into(),
            shown_at: Instant::now(),
        });
        self.dirty = true;
    }

    /// Drop the notice once it has been visible long enough.
    pub fn expire_notice(&mut self, now: Instant) {
        let ttl = Duration::from_secs(self.config.ui.notice_secs);
        let expired = self
            .notice
            .as_ref()
            .is_some_and(|n| now.duration_since(n.shown_at) >= ttl);
        if expired {
            self.notice = None;
            self.dirty = true;
        }
    }

    pub fn status_line(&self) -> String {
        let shown = self.view.displayed_components().len();
        if self.view.is_search_active() {
            format!("Search: {} match{}", shown, if shown == 1 { "" } else { "es" })
        } else {
            let name = self
                .view
                .displayed_category()
                .map(|c| c.name.as_str())
                .unwrap_or("All Components");
            format!("{}: {} shown", name, shown)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::small_catalog;

    #[test]
    fn test_input_editing() {
        let mut input = InputState::new();
        for c in "card btn".chars() {
            input.insert_char(c);
        }
        input.delete_word_back();
        assert_eq!(input.text, "card ");
        input.delete_back();
        input.move_home();
        input.delete_forward();
        assert_eq!(input.text, "ard");
        input.move_end();
        input.insert_char('é');
        assert_eq!(input.text, "ardé");
        input.move_left();
        assert_eq!(input.cursor, 3);
        assert_eq!(input.cursor_column(), 3);
        input.clear();
        assert!(input.text.is_empty());
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn test_category_cycling_wraps() {
        let catalog = small_catalog();
        let mut state = AppState::new(&catalog, AppConfig::default());
        assert_eq!(state.selected_category_index(), Some(0));
        state.select_next_category();
        assert_eq!(state.view.selected_category_id(), "cards");
        state.select_next_category();
        assert_eq!(state.view.selected_category_id(), "buttons");
        state.select_prev_category();
        assert_eq!(state.view.selected_category_id(), "cards");
    }

    #[test]
    fn test_grid_cursor_is_clamped() {
        let catalog = small_catalog();
        let mut state = AppState::new(&catalog, AppConfig::default());
        state.move_grid_cursor(5);
        assert_eq!(state.grid_cursor, 1);
        state.move_grid_cursor(-9);
        assert_eq!(state.grid_cursor, 0);
        assert_eq!(state.focused_component().map(|c| c.id.as_str()), Some("btn-primary"));
    }

    #[test]
    fn test_search_resets_cursor() {
        let catalog = small_catalog();
        let mut state = AppState::new(&catalog, AppConfig::default());
        state.grid_cursor = 1;
        state.search.insert_char('b');
        state.sync_search();
        assert_eq!(state.grid_cursor, 0);
        assert_eq!(state.view.search_query(), "b");
        state.clear_search();
        assert_eq!(state.view.search_query(), "");
    }

    #[test]
    fn test_notice_expires() {
        let catalog = small_catalog();
        let mut state = AppState::new(&catalog, AppConfig::default());
        state.notify(NoticeKind::Success, "Copied", "");
        let shown_at = state.notice.as_ref().unwrap().shown_at;
        state.expire_notice(shown_at + Duration::from_secs(1));
        assert!(state.notice.is_some());
        state.expire_notice(shown_at + Duration::from_secs(3));
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_status_line() {
        let catalog = small_catalog();
        let mut state = AppState::new(&catalog, AppConfig::default());
        assert_eq!(state.status_line(), "Buttons: 2 shown");
        state.view.set_search_query("basic");
        assert_eq!(state.status_line(), "Search: 2 matches");
        state.view.set_search_query("");
        state.view.select_category("modals");
        assert_eq!(state.status_line(), "All Components: 0 shown");
    }
}
