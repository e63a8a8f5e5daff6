use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 24, 33);
    pub const BG_SURFACE: Color = Color::Rgb(30, 33, 45);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 60);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 165, 185);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 110, 130);
    pub const BORDER_DIM: Color = Color::Rgb(70, 75, 95);
    pub const ACCENT_BLUE: Color = Color::Rgb(1, 118, 211);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 190);
    pub const ACCENT_AMBER: Color = Color::Rgb(240, 180, 70);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(175, 160, 240);
    pub const ACCENT_GREEN: Color = Color::Rgb(110, 200, 120);
    pub const ACCENT_RED: Color = Color::Rgb(235, 100, 100);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn category_normal() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn category_selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_BLUE)
            .add_modifier(Modifier::BOLD)
    }

    pub fn count_badge() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY).bg(Self::BG_ELEVATED)
    }

    pub fn tag() -> Style {
        Style::default().fg(Self::ACCENT_LAVENDER).bg(Self::BG_ELEVATED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn code() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn notice_success() -> Style {
        Style::default().fg(Self::ACCENT_GREEN)
    }

    pub fn notice_error() -> Style {
        Style::default().fg(Self::ACCENT_RED)
    }
}
