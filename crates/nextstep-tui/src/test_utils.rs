//! Test utilities for TUI rendering verification
//!
//! Helpers for testing widgets and full-screen rendering using ratatui's
//! TestBackend. Public so the integration tests in `tests/` can use them;
//! not part of the app's runtime surface.

use ratatui::backend::{Backend, TestBackend};
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal.
///
/// For simple widget testing:
/// ```ignore
/// let mut term = TestTerminal::new();
/// term.render_widget(my_widget, term.area());
/// assert!(term.buffer_contains("expected text"));
/// ```
///
/// For full-frame rendering (like `render::view`), use `draw_with()`.
pub struct TestTerminal {
    terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.backend().size().expect("backend size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a single widget over the full test area
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw widget");
    }

    /// Draw a full frame with the given closure
    pub fn draw_with<F>(&mut self, render: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render).expect("draw frame");
    }

    /// The whole buffer flattened into one string, rows joined by newlines
    pub fn content(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        let area = *buffer.area();
        let mut rows = Vec::with_capacity(area.height as usize);
        for y in 0..area.height {
            let mut row = String::new();
            for x in 0..area.width {
                row.push_str(buffer[(x, y)].symbol());
            }
            rows.push(row);
        }
        rows.join("\n")
    }

    /// Check whether the rendered buffer contains the given text on any row
    pub fn buffer_contains(&self, needle: &str) -> bool {
        self.content().contains(needle)
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
