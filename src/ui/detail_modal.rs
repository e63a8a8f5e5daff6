use crate::app::state::*;
use crate::ui::layout::centered_popup;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(component) = state.view.selected_component() else {
        return;
    };

    let popup_area = centered_popup(frame.area(), 75, 85, 60, 20);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", component.name))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Style::default().fg(Theme::ACCENT_LAVENDER))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(Theme::BG_SURFACE));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 8 || inner.width < 20 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(1), // Tags
            Constraint::Length(1), // Preview
            Constraint::Length(1), // Tabs
            Constraint::Min(1),    // Tab content
            Constraint::Length(1), // Footer
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(component.description.as_str())
            .style(Theme::secondary())
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let mut tag_spans = Vec::new();
    for tag in &component.tags {
        tag_spans.push(Span::styled(format!(" {} ", tag), Theme::tag()));
        tag_spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(tag_spans)), chunks[1]);

    let preview = match component.preview_image() {
        Some(url) if state.config.ui.show_preview_urls => Line::from(vec![
            Span::styled("▣ Preview: ", Theme::key_hint()),
            Span::styled(url, Theme::muted()),
        ]),
        Some(_) => Line::from(Span::styled("▣ Preview image", Theme::muted())),
        None => Line::from(Span::styled("<> Component Preview", Theme::muted())),
    };
    frame.render_widget(Paragraph::new(preview), chunks[2]);

    let tab_style = |tab: DetailTab| {
        if state.detail_tab == tab {
            Theme::category_selected()
        } else {
            Theme::secondary()
        }
    };
    let tabs = Line::from(vec![
        Span::styled(" <> HTML Markup ", tab_style(DetailTab::Markup)),
        Span::raw(" "),
        Span::styled(" ✦ Usage Notes ", tab_style(DetailTab::Notes)),
    ]);
    frame.render_widget(Paragraph::new(tabs), chunks[3]);

    let content_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    let content = match state.detail_tab {
        DetailTab::Markup => Paragraph::new(component.markup.as_str())
            .style(Theme::code())
            .block(content_block.title(" HTML ").title_style(Theme::muted())),
        DetailTab::Notes => Paragraph::new(vec![
            Line::from(Span::styled("Implementation Notes", Theme::title())),
            Line::from(""),
            Line::from(Span::styled(component.notes.as_str(), Theme::secondary())),
        ])
        .wrap(Wrap { trim: true })
        .block(content_block),
    };
    frame.render_widget(content.scroll((state.detail_scroll, 0)), chunks[4]);

    let footer = Line::from(vec![
        Span::styled("Salesforce Lightning Design System", Theme::muted()),
        Span::raw("   "),
        Span::styled("Tab", Theme::key_hint()),
        Span::styled(" Switch  ", Theme::secondary()),
        Span::styled("↑↓", Theme::key_hint()),
        Span::styled(" Scroll  ", Theme::secondary()),
        Span::styled("c", Theme::key_hint()),
        Span::styled(" Copy  ", Theme::secondary()),
        Span::styled("Esc", Theme::key_hint()),
        Span::styled(" Close", Theme::secondary()),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[5]);
}
