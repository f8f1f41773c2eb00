//! Shared style helpers built on the palette

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

/// Bordered container for cards and panels. Selected containers get the
/// active border color.
pub fn card_block(selected: bool) -> Block<'static> {
    let border_color = if selected {
        palette::BORDER_ACTIVE
    } else {
        palette::BORDER_DIM
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette::CARD_BG))
}

pub fn title_style() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn secondary_style() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn muted_style() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn tag_style() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn error_style() -> Style {
    Style::default()
        .fg(palette::STATUS_RED)
        .add_modifier(Modifier::BOLD)
}

pub fn loading_style() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

pub fn selected_row_style() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}
