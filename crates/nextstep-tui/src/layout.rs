//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (app title + key hints)
    pub header: Rect,

    /// Main content (country cards or the detail page)
    pub content: Rect,

    /// One-line status bar at the bottom
    pub status: Rect,
}

/// Split the screen into header, content, and status bar
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (bordered, one inner row)
        Constraint::Min(3),    // Content
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_heights() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.content.height, 20); // 24 - 3 - 1
        assert_eq!(areas.content.y, 3);
    }

    #[test]
    fn test_layout_areas_cover_screen() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = create(area);
        assert_eq!(
            areas.header.height + areas.content.height + areas.status.height,
            area.height
        );
    }

    #[test]
    fn test_layout_survives_tiny_terminal() {
        let areas = create(Rect::new(0, 0, 20, 5));
        assert!(areas.content.height >= 1);
    }
}
