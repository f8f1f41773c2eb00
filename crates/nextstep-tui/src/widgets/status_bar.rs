//! One-line status bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Bottom status line: a transient note when one is set, the route's key
/// hints otherwise.
pub struct StatusBar<'a> {
    hints: &'a str,
    note: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(hints: &'a str) -> Self {
        Self { hints, note: None }
    }

    pub fn note(mut self, note: Option<&'a str>) -> Self {
        self.note = note;
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (text, style) = match self.note {
            Some(note) => (note, styles::title_style()),
            None => (self.hints, styles::muted_style()),
        };
        Paragraph::new(Line::from(Span::styled(text, style))).render(area, buf);
    }
}
