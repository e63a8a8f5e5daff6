use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Search;
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = state.search.text.as_str();
    let mut spans = vec![Span::styled("⌕ ", Style::default().fg(Theme::TEXT_MUTED))];
    if text.is_empty() {
        spans.push(Span::styled("Search components...", Theme::muted()));
    } else {
        spans.push(Span::styled(text, Theme::input_text()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    // Clear hint, the terminal stand-in for the input's X button
    if !text.is_empty() && inner.width > 4 {
        let x_area = Rect::new(inner.right() - 1, inner.y, 1, 1);
        frame.render_widget(Paragraph::new(Span::styled("✕", Theme::muted())), x_area);
    }

    if focused && inner.width > 0 {
        // Prompt offset: "⌕ " (2 columns)
        let prompt_offset = 2u16;
        let cursor_x = inner.x + prompt_offset + state.search.cursor_column() as u16;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}
