use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const SIDEBAR_WIDTH: u16 = 30;
const SPACING: u16 = 1;
/// Card height including borders.
pub const CARD_HEIGHT: u16 = 7;

pub struct AppLayout {
    pub sidebar_header: Rect,
    pub search_box: Rect,
    pub category_list: Rect,
    pub sidebar_footer: Rect,
    pub main_header: Rect,
    pub grid: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: sidebar | gap | main
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(SPACING)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Min(20),
        ])
        .split(content);

    let sidebar = h_chunks[0];
    let main = h_chunks[1];

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Search
            Constraint::Min(3),    // Categories
            Constraint::Length(1), // Total
        ])
        .split(sidebar);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(3),    // Cards
        ])
        .split(main);

    AppLayout {
        sidebar_header: sidebar_chunks[0],
        search_box: sidebar_chunks[1],
        category_list: sidebar_chunks[2],
        sidebar_footer: sidebar_chunks[3],
        main_header: main_chunks[0],
        grid: main_chunks[1],
        status_bar,
    }
}

/// Number of card columns that fit into a grid `width` columns wide.
pub fn columns_for_width(width: u16, card_width: u16) -> usize {
    (width / card_width.max(1)).max(1) as usize
}

/// Number of card columns for a terminal `terminal_width` columns wide.
pub fn grid_columns(terminal_width: u16, card_width: u16) -> usize {
    let grid_width = terminal_width.saturating_sub(SIDEBAR_WIDTH + SPACING);
    columns_for_width(grid_width, card_width)
}

/// Number of card rows visible in a terminal `terminal_height` rows tall.
pub fn grid_rows(terminal_height: u16) -> usize {
    // status bar + main header
    let grid_height = terminal_height.saturating_sub(1 + 4);
    (grid_height / CARD_HEIGHT).max(1) as usize
}

/// First card row to draw so that `cursor_row` stays visible.
pub fn first_visible_row(cursor_row: usize, visible_rows: usize) -> usize {
    cursor_row.saturating_sub(visible_rows.saturating_sub(1))
}

/// A rectangle centred in `area`, `percent_x` by `percent_y` of its size,
/// but at least `min_w` by `min_h` where the area allows.
pub fn centered_popup(area: Rect, percent_x: u16, percent_y: u16, min_w: u16, min_h: u16) -> Rect {
    let popup_w = ((area.width as u32 * percent_x as u32 / 100) as u16)
        .max(min_w)
        .min(area.width.saturating_sub(4));
    let popup_h = ((area.height as u32 * percent_y as u32 / 100) as u16)
        .max(min_h)
        .min(area.height.saturating_sub(2));
    let popup_x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    Rect::new(popup_x, popup_y, popup_w, popup_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(80, 34), 1);
        assert_eq!(grid_columns(120, 34), 2);
        assert_eq!(grid_columns(170, 34), 4);
        // never zero, even on tiny terminals
        assert_eq!(grid_columns(10, 34), 1);
        assert_eq!(columns_for_width(100, 0), 100);
    }

    #[test]
    fn test_first_visible_row() {
        assert_eq!(first_visible_row(0, 3), 0);
        assert_eq!(first_visible_row(2, 3), 0);
        assert_eq!(first_visible_row(5, 3), 3);
        assert_eq!(first_visible_row(4, 0), 4);
    }

    #[test]
    fn test_centered_popup_stays_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_popup(area, 70, 80, 60, 20);
        assert_eq!(popup, Rect::new(15, 4, 70, 32));

        let small = Rect::new(0, 0, 50, 15);
        let popup = centered_popup(small, 70, 80, 60, 20);
        assert!(popup.right() <= small.right());
        assert!(popup.bottom() <= small.bottom());

        let wide = Rect::new(0, 0, 1200, 400);
        let popup = centered_popup(wide, 75, 85, 60, 20);
        assert_eq!(popup, Rect::new(150, 30, 900, 340));
    }

    #[test]
    fn test_layout_splits() {
        let layout = compute_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.search_box.width, SIDEBAR_WIDTH);
        assert_eq!(layout.grid.x, SIDEBAR_WIDTH + SPACING);
        assert_eq!(layout.grid.width, 120 - SIDEBAR_WIDTH - SPACING);
    }
}
