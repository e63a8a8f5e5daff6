use crate::app::state::*;
use crate::ui::icons;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border())
        .style(Theme::panel_bg());
    let lines = vec![
        Line::from(vec![
            Span::styled(" ◧ ", Style::default().fg(Theme::ACCENT_BLUE).add_modifier(Modifier::BOLD)),
            Span::styled("Component Library", Theme::title()),
        ]),
        Line::from(Span::styled("   Salesforce Design System", Theme::muted())),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_categories(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Sidebar;
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
        .title(" Categories ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .style(bg);

    let inner_width = area.width.saturating_sub(2) as usize;
    let counts = state.view.counts_by_category();
    let selected = state.view.selected_category_id();

    let mut items: Vec<ListItem> = Vec::new();
    for category in state.view.categories() {
        let is_selected = category.id == selected;
        let count = counts.get(category.id.as_str()).copied().unwrap_or(0);

        let label = format!(" {} {}", icons::glyph(&category.icon), category.name);
        let badge = format!(" {} ", count);
        let chevron = if is_selected { " ›" } else { "  " };
        let pad = inner_width
            .saturating_sub(label.width() + badge.width() + chevron.width());

        let (label_style, badge_style) = if is_selected {
            (Theme::category_selected(), Theme::category_selected())
        } else {
            (Theme::category_normal(), Theme::count_badge())
        };

        items.push(ListItem::new(Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(" ".repeat(pad), label_style),
            Span::styled(badge, badge_style),
            Span::styled(chevron, label_style),
        ])));
    }

    if items.is_empty() {
        items.push(ListItem::new(Span::styled(" No categories", Theme::muted())));
    }

    frame.render_widget(List::new(items).block(block), area);
}

pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let total = state.view.catalog().total_categorized();
    let line = Line::from(vec![
        Span::styled(total.to_string(), Theme::secondary().add_modifier(Modifier::BOLD)),
        Span::styled(" components total", Theme::muted()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
