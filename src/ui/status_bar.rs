use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    let hints = if state.view.is_detail_visible() {
        " Tab tab  c copy  Esc close "
    } else {
        match state.focus {
            FocusPanel::Sidebar => " ↑↓ category  Enter cards  / search  q quit ",
            FocusPanel::Grid => " ←↑↓→ move  Enter details  c copy  / search  q quit ",
            FocusPanel::Search => " type to search  Esc clear  Enter cards ",
        }
    };
    parts.push(Span::styled(hints, Style::default().fg(Theme::TEXT_MUTED).bg(Theme::BG_ELEVATED)));

    // Focus indicator
    let focus_name = match state.focus {
        FocusPanel::Sidebar => "CATEGORIES",
        FocusPanel::Grid => "COMPONENTS",
        FocusPanel::Search => "SEARCH",
    };
    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
