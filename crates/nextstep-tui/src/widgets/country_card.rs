//! Country summary card for the home listing
//!
//! Pure function of a `CountryDisplay`: flag and name header, the latest
//! update lines, tag chips, and a last-updated footer. Selection is a
//! border highlight only; the card holds no state and does no fetching.
//! The aggregate's banner image has no terminal rendering.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use nextstep_core::CountryDisplay;

use crate::theme::styles;

/// Rows a card occupies in the listing (borders included).
pub const CARD_HEIGHT: u16 = 8;

/// Character budget for one update line before the ellipsis marker.
pub const UPDATE_CHAR_BUDGET: usize = 85;

pub struct CountryCard<'a> {
    display: &'a CountryDisplay,
    selected: bool,
}

impl<'a> CountryCard<'a> {
    pub fn new(display: &'a CountryDisplay) -> Self {
        Self {
            display,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for CountryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.selected);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            format!("{} {}", self.display.flag, self.display.name),
            styles::title_style(),
        )));

        for update in &self.display.updates {
            lines.push(Line::from(Span::styled(
                format!("• {}", truncate_update(update)),
                styles::secondary_style(),
            )));
        }

        let tags = self
            .display
            .tags
            .iter()
            .map(|tag| format!("[{tag}]"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(tags, styles::tag_style())));

        lines.push(Line::from(Span::styled(
            format!("Last updated: {}", self.display.last_update),
            styles::muted_style(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Clip an update line to [`UPDATE_CHAR_BUDGET`] characters, marking the
/// cut with an ellipsis.
fn truncate_update(text: &str) -> String {
    if text.chars().count() <= UPDATE_CHAR_BUDGET {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(UPDATE_CHAR_BUDGET).collect();
        format!("{clipped}…")
    }
}
