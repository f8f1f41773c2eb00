//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Main header showing the app title, tagline, and key hints.
pub struct MainHeader<'a> {
    hints: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(hints: &'a str) -> Self {
        Self { hints }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled("NextStep", styles::title_style()),
            Span::styled(
                "  Monitor immigration policy updates across the world",
                styles::secondary_style(),
            ),
            Span::styled(format!("   {}", self.hints), styles::muted_style()),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}
