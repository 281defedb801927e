//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + screen tabs)
    pub header: Rect,

    /// Main content area for the active screen
    pub body: Rect,

    /// Single-row status bar with key hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (border + tabs row + border)
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the stub screen body into list (left) and detail panel (right).
pub fn split_stub_panel(body: Rect) -> (Rect, Rect) {
    let chunks =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).split(body);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.body.height, 20);
        assert_eq!(layout.body.y, 3);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.body.height + layout.status.height,
            area.height
        );
    }

    #[test]
    fn test_stub_panel_split_covers_body() {
        let body = Rect::new(0, 3, 80, 20);
        let (list, detail) = split_stub_panel(body);
        assert_eq!(list.width + detail.width, body.width);
        assert!(list.width < detail.width);
    }
}
