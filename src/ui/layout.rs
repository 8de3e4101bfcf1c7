use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub action_bar: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title and attempt counter
            Constraint::Min(8),    // Board or summary
            Constraint::Length(3), // Action button
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        body: chunks[1],
        action_bar: chunks[2],
        status_bar: chunks[3],
    }
}

/// Split the board into a prompt line and three side-by-side cards.
pub fn board_layout(area: Rect) -> (Rect, [Rect; 3]) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Prompt
            Constraint::Min(5),    // Cards
        ])
        .split(area);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    (rows[0], [cards[0], cards[1], cards[2]])
}

/// A rectangle of at most `width` x `height` centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_screen() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = compute_layout(area);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.y, 23);
        assert_eq!(
            layout.header.height + layout.body.height + layout.action_bar.height + layout.status_bar.height,
            24
        );
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(10, 5, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(15, 8, 10, 4));
        assert_eq!(centered(area, 40, 40), area);
    }
}
