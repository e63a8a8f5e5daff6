mod detail_modal;
mod grid;
mod icons;
pub mod layout;
mod notice;
mod search_box;
mod sidebar;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    sidebar::render_header(frame, app_layout.sidebar_header);
    search_box::render(frame, app_layout.search_box, state);
    sidebar::render_categories(frame, app_layout.category_list, state);
    sidebar::render_footer(frame, app_layout.sidebar_footer, state);
    grid::render_header(frame, app_layout.main_header, state);
    grid::render_cards(frame, app_layout.grid, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlays
    detail_modal::render(frame, state);
    notice::render(frame, state);
}

/// Cut `text` to at most `max_width` display columns, marking the cut
/// with "...".
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().filter_map(|c| c.width()).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width < 4 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{FocusPanel, NoticeKind};
    use crate::catalog::fixtures::small_catalog;
    use crate::catalog::Catalog;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;

    fn draw(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Buttons", 10), "Buttons");
        assert_eq!(truncate("Secondary Button Rounded", 12), "Secondary...");
        assert_eq!(truncate("abcdef", 3), "...");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_render_category_view() {
        let catalog = Catalog::builtin();
        let state = AppState::new(&catalog, AppConfig::default());
        let screen = draw(&state, 140, 40);
        assert!(screen.contains("Component Library"));
        assert!(screen.contains("Categories"));
        assert!(screen.contains("Navigation"));
        assert!(screen.contains("Interactive button components"));
        assert!(screen.contains("2 components"));
        assert!(screen.contains("Primary Button"));
        // orphaned records are not counted in the sidebar total
        let total = catalog.total_categorized();
        assert!(screen.contains(&format!("{} components total", total)));
    }

    #[test]
    fn test_render_search_results() {
        let catalog = small_catalog();
        let mut state = AppState::new(&catalog, AppConfig::default());
        for c in "destructive".chars() {
            state.search.insert_char(c);
        }
        state.sync_search();
        state.focus = FocusPanel::Search;
        let screen = draw(&state, 120, 40);
        assert!(screen.contains("Search Results"));
        assert!(screen.contains("Showing results for \"destructive\""));
        assert!(screen.contains("1 component "));
        assert!(screen.contains("Destructive Button"));
    }

    #[test]
    fn test_render_empty_states() {
        let catalog = small_catalog();
        let mut state = AppState::new(&catalog, AppConfig::default());
        state.view.set_search_query("zzz");
        let screen = draw(&state, 120, 40);
        assert!(screen.contains("No components found"));
        assert!(screen.contains("No components match \"zzz\""));

        state.view.set_search_query("");
        state.view.select_category("modals");
        let screen = draw(&state, 120, 40);
        assert!(screen.contains("All Components"));
        assert!(screen.contains("No components available in this category."));
    }

    #[test]
    fn test_render_detail_and_notice() {
        let catalog = Catalog::builtin();
        let mut state = AppState::new(&catalog, AppConfig::default());
        let record = catalog.component("btn-secondary").unwrap();
        state.open_detail(record);
        state.notify(NoticeKind::Success, "Markup copied to clipboard!", "copied");
        let screen = draw(&state, 140, 45);
        assert!(screen.contains("Secondary Button Rounded"));
        assert!(screen.contains("HTML Markup"));
        assert!(screen.contains("slds-button_neutral"));
        assert!(screen.contains("Markup copied to clipboard!"));

        state.toggle_detail_tab();
        let screen = draw(&state, 140, 45);
        assert!(screen.contains("Implementation Notes"));
        assert!(screen.contains("Use alongside primary buttons"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let catalog = Catalog::builtin();
        let mut state = AppState::new(&catalog, AppConfig::default());
        draw(&state, 20, 6);
        state.open_detail(&catalog.components()[0]);
        state.notify(NoticeKind::Error, "Failed to copy markup", "");
        draw(&state, 20, 6);
    }
}
