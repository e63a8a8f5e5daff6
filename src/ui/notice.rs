use crate::app::state::*;
use crate::ui::theme::Theme;
use crate::ui::truncate;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

const WIDTH: u16 = 48;
const HEIGHT: u16 = 4;

/// Toast in the bottom-right corner, above the status bar.
pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(ref notice) = state.notice else {
        return;
    };

    let area = frame.area();
    let width = WIDTH.min(area.width);
    let height = HEIGHT.min(area.height.saturating_sub(1));
    if width < 10 || height < 3 {
        return;
    }
    let x = area.right() - width;
    let y = area.bottom().saturating_sub(height + 1);
    let toast_area = Rect::new(x, y, width, height);

    let (icon, style) = match notice.kind {
        NoticeKind::Success => ("✓ ", Theme::notice_success()),
        NoticeKind::Error => ("✕ ", Theme::notice_error()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(style)
        .style(Style::default().bg(Theme::BG_ELEVATED));
    let text_w = width.saturating_sub(4) as usize;
    let lines = vec![
        Line::from(vec![
            Span::styled(icon, style.add_modifier(Modifier::BOLD)),
            Span::styled(truncate(&notice.title, text_w), Theme::title()),
        ]),
        Line::from(Span::styled(
            format!("  {}", truncate(&notice.description, text_w.saturating_sub(2))),
            Theme::secondary(),
        )),
    ];

    frame.render_widget(Clear, toast_area);
    frame.render_widget(Paragraph::new(lines).block(block), toast_area);
}
