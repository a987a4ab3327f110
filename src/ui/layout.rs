use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Sidebar width when the terminal is wide enough to show it.
pub const SIDEBAR_WIDTH: u16 = 36;
/// Narrower terminals stack everything in the main column.
pub const SIDEBAR_MIN_TOTAL_WIDTH: u16 = 90;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into an optional sidebar and the main column.
pub fn body_columns(body: Rect) -> (Option<Rect>, Rect) {
    if body.width < SIDEBAR_MIN_TOTAL_WIDTH {
        return (None, body);
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(body);
    (Some(columns[0]), columns[1])
}

/// Main column of a full terminal area.
pub fn main_rect(area: Rect) -> Rect {
    let (_, body, _) = layout_regions(area);
    body_columns(body).1
}

/// Area inside a one-cell border.
pub fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_area() {
        let area = Rect::new(0, 0, 120, 40);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height + body.height + footer.height, 40);
        assert_eq!(body.y, 3);
    }

    #[test]
    fn narrow_terminal_hides_sidebar() {
        let (sidebar, main) = body_columns(Rect::new(0, 0, 80, 20));
        assert!(sidebar.is_none());
        assert_eq!(main.width, 80);

        let (sidebar, main) = body_columns(Rect::new(0, 0, 120, 20));
        assert_eq!(sidebar.map(|r| r.width), Some(SIDEBAR_WIDTH));
        assert_eq!(main.width, 120 - SIDEBAR_WIDTH);
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect_by_size(area, 50, 4);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.y, 3);
    }
}
