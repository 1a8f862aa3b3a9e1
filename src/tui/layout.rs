use ratatui::layout::{Constraint, Direction, Layout as RatLayout, Rect};

pub struct Layout {
    pub inner_area: Rect, // Area inside the outer border
    pub capture_area: Rect,
    pub list_area: Rect,
    pub field_area: Rect,
    pub status_area: Rect,
}

impl Layout {
    /// Minimum terminal dimensions required for the application
    /// Width: 30 columns keeps the capture field and field preview usable
    /// Height: 13 lines (capture 3 + list 3 minimum + field preview 3 +
    /// status 1 + outer borders and padding)
    pub const MIN_WIDTH: u16 = 30;
    pub const MIN_HEIGHT: u16 = 13;

    pub fn calculate(size: Rect) -> Self {
        // Ensure minimum terminal size (accounting for outer border)
        let width = size.width.max(Self::MIN_WIDTH);
        let height = size.height.max(Self::MIN_HEIGHT);
        let size = Rect::new(size.x, size.y, width, height);

        // Calculate inner area (accounting for outer border: 1 char on each side)
        let inner_area = Rect::new(
            size.x + 1,
            size.y + 1,
            size.width.saturating_sub(2),
            size.height.saturating_sub(2),
        );

        // Split vertically: capture field (3 lines for borders + content),
        // category list (grows), serialized field preview (3 lines), status (1 line)
        let vertical = RatLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Capture input
                Constraint::Min(3),    // Category list
                Constraint::Length(3), // Serialized field preview
                Constraint::Length(1), // Status
            ])
            .split(inner_area);

        Self {
            inner_area,
            capture_area: vertical[0],
            list_area: vertical[1],
            field_area: vertical[2],
            status_area: vertical[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_stack_without_overlap() {
        let layout = Layout::calculate(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.capture_area.height, 3);
        assert_eq!(layout.field_area.height, 3);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(
            layout.list_area.y,
            layout.capture_area.y + layout.capture_area.height
        );
        assert_eq!(
            layout.field_area.y,
            layout.list_area.y + layout.list_area.height
        );
    }

    #[test]
    fn undersized_terminal_is_clamped_to_minimum() {
        let layout = Layout::calculate(Rect::new(0, 0, 10, 5));
        assert!(layout.inner_area.width >= Layout::MIN_WIDTH - 2);
        assert!(layout.list_area.height >= 3);
    }
}
