//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use ratatui::Frame;

use nextstep_app::{AppState, DetailPhase, HomePhase, Route};
use nextstep_core::CountryDisplay;

use crate::layout;
use crate::theme::{palette, styles};
use crate::widgets::{ArticleList, CountryCard, MainHeader, StatusBar, CARD_HEIGHT};

const HOME_HINTS: &str = "j/k:move  Enter:open  r:reload  q:quit";
const DETAIL_HINTS: &str = "j/k:move  Enter/o:open article  Esc/h:home  r:reload  q:quit";

/// Render the complete UI (View function in TEA).
///
/// Pure rendering: dispatches on route and phase, never mutates state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill the terminal with the deepest background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);

    frame.render_widget(MainHeader::new("q:quit"), areas.header);

    let hints = match state.route {
        Route::Home => {
            render_home(frame, areas.content, state);
            HOME_HINTS
        }
        Route::Country { .. } => {
            render_detail(frame, areas.content, state);
            DETAIL_HINTS
        }
    };

    frame.render_widget(
        StatusBar::new(hints).note(state.status.as_deref()),
        areas.status,
    );
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    match &state.home {
        HomePhase::Loading => render_notice(frame, area, "Loading immigration updates..."),
        HomePhase::Ready { cards, selected } => {
            for (index, card) in cards.iter().enumerate() {
                let y = area.y + (index as u16) * CARD_HEIGHT;
                if y >= area.bottom() {
                    break;
                }
                let height = CARD_HEIGHT.min(area.bottom() - y);
                let card_area = Rect::new(area.x, y, area.width, height);
                frame.render_widget(
                    CountryCard::new(card).selected(index == *selected),
                    card_area,
                );
            }
        }
        HomePhase::Failed { message } => render_error_panel(
            frame,
            area,
            "Unable to load countries",
            message,
            "Press r to reload",
        ),
    }
}

fn render_detail(frame: &mut Frame, area: Rect, state: &AppState) {
    match &state.detail {
        DetailPhase::Loading => render_notice(frame, area, "Loading country updates..."),
        DetailPhase::Ready {
            display,
            articles,
            selected,
        } => {
            let chunks =
                Layout::vertical([Constraint::Length(5), Constraint::Min(3)]).split(area);
            render_country_info(frame, chunks[0], display);
            frame.render_widget(ArticleList::new(articles, *selected), chunks[1]);
        }
        DetailPhase::NotFound => render_error_panel(
            frame,
            area,
            "Country not found",
            "This country is not covered yet",
            "Press Esc or h to go back home",
        ),
        DetailPhase::Failed { message } => render_error_panel(
            frame,
            area,
            "Connection failed",
            message,
            "Press r to retry, Esc or h to go back home",
        ),
    }
}

fn render_country_info(frame: &mut Frame, area: Rect, display: &CountryDisplay) {
    let block = styles::card_block(false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let tags = display
        .tags
        .iter()
        .map(|tag| format!("[{tag}]"))
        .collect::<Vec<_>>()
        .join(" ");

    let lines = vec![
        Line::from(Span::styled(
            format!("{} {}", display.flag, display.name),
            styles::title_style(),
        )),
        Line::from(Span::styled(&display.description, styles::secondary_style())),
        Line::from(vec![
            Span::styled(
                format!("Last updated: {}   ", display.last_update),
                styles::muted_style(),
            ),
            Span::styled(tags, styles::tag_style()),
        ]),
    ];
    Paragraph::new(lines).render(inner, frame.buffer_mut());
}

fn render_notice(frame: &mut Frame, area: Rect, text: &str) {
    let block = styles::card_block(false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(text, styles::loading_style()))),
        inner,
    );
}

fn render_error_panel(frame: &mut Frame, area: Rect, title: &str, message: &str, hint: &str) {
    let block = styles::card_block(false);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let lines = vec![
        Line::from(Span::styled(title, styles::error_style())),
        Line::from(Span::styled(message, styles::secondary_style())),
        Line::from(""),
        Line::from(Span::styled(hint, styles::muted_style())),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
