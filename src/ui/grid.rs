use crate::app::state::*;
use crate::catalog::ComponentRecord;
use crate::ui::layout::{self, CARD_HEIGHT};
use crate::ui::theme::Theme;
use crate::ui::truncate;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = &state.view;
    let (title, subtitle) = if view.is_search_active() {
        (
            Line::from(vec![
                Span::styled("⌕ ", Style::default().fg(Theme::ACCENT_BLUE)),
                Span::styled("Search Results", Theme::title()),
            ]),
            format!("Showing results for \"{}\"", view.search_query()),
        )
    } else if let Some(category) = view.displayed_category() {
        (
            Line::from(Span::styled(category.name.as_str(), Theme::title())),
            category.description.clone(),
        )
    } else {
        (
            Line::from(Span::styled("All Components", Theme::title())),
            "Browse the complete component library".to_string(),
        )
    };

    let count = view.displayed_components().len();
    let badge = format!(" {} component{} ", count, if count == 1 { "" } else { "s" });
    let badge_w = badge.width() as u16;

    let text_area = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(badge_w + 2),
        inner.height,
    );
    let subtitle = truncate(&subtitle, text_area.width as usize);
    frame.render_widget(
        Paragraph::new(vec![title, Line::from(Span::styled(subtitle, Theme::secondary()))]),
        text_area,
    );

    if inner.width > badge_w {
        let badge_area = Rect::new(inner.right() - badge_w, inner.y, badge_w, 1);
        frame.render_widget(Paragraph::new(Span::styled(badge, Theme::count_badge())), badge_area);
    }
}

pub fn render_cards(frame: &mut Frame, area: Rect, state: &AppState) {
    let components = state.view.displayed_components();

    if components.is_empty() {
        render_empty(frame, area, state);
        return;
    }

    let cols = layout::columns_for_width(area.width, state.config.ui.card_width);
    let card_w = area.width / cols as u16;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let cursor = state.grid_cursor.min(components.len() - 1);
    let first_row = layout::first_visible_row(cursor / cols, visible_rows);

    for (i, component) in components.iter().enumerate().skip(first_row * cols) {
        let row = i / cols - first_row;
        if row >= visible_rows {
            break;
        }
        let col = i % cols;
        let y = area.y + row as u16 * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        let card_area = Rect::new(area.x + col as u16 * card_w, y, card_w, height);
        let focused = state.focus == FocusPanel::Grid && i == cursor;
        render_card(frame, card_area, component, focused, state);
    }
}

fn render_card(frame: &mut Frame, area: Rect, component: &ComponentRecord, focused: bool, state: &AppState) {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };
    let inner_w = area.width.saturating_sub(4) as usize;

    let block = Block::default()
        .title(format!(" {} ", truncate(&component.name, inner_w)))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(ratatui::widgets::block::Padding::horizontal(1))
        .style(if focused { Theme::panel_bg_focused() } else { Theme::panel_bg() });

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    // Description: two lines at most
    let desc_area = Rect::new(inner.x, inner.y, inner.width, inner.height.min(2));
    frame.render_widget(
        Paragraph::new(component.description.as_str())
            .style(Theme::secondary())
            .wrap(Wrap { trim: true }),
        desc_area,
    );

    let mut y = inner.y + desc_area.height;
    if y < inner.bottom() {
        let mut spans = Vec::new();
        for tag in component.tags.iter().take(state.config.ui.tag_limit) {
            spans.push(Span::styled(format!(" {} ", tag), Theme::tag()));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), Rect::new(inner.x, y, inner.width, 1));
        y += 1;
    }

    if y < inner.bottom() {
        let preview = match component.preview_image() {
            Some(url) if state.config.ui.show_preview_urls => {
                Span::styled(format!("▣ {}", truncate(url, (inner.width as usize).saturating_sub(2))), Theme::muted())
            }
            Some(_) => Span::styled("▣ preview image", Theme::muted()),
            None => Span::styled("<> no preview", Theme::muted()),
        };
        frame.render_widget(Paragraph::new(preview), Rect::new(inner.x, y, inner.width, 1));
    }
}

fn render_empty(frame: &mut Frame, area: Rect, state: &AppState) {
    let message = if state.view.is_search_active() {
        format!(
            "No components match \"{}\". Try a different search term.",
            state.view.search_query()
        )
    } else {
        "No components available in this category.".to_string()
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("◫", Theme::muted())),
        Line::from(Span::styled("No components found", Theme::title())),
        Line::from(Span::styled(message, Theme::secondary())),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
