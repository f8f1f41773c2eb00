//! Full-screen render tests for every route and phase

use super::view;
use crate::test_utils::TestTerminal;

use chrono::NaiveDate;
use nextstep_app::{AppState, DetailPhase, HomePhase, Route};
use nextstep_core::{build_country_display, Article, CountryId};

fn render(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(100, 30);
    term.draw_with(|frame| view(frame, state));
    term
}

fn article(id: i64, title: &str) -> Article {
    Article {
        id,
        title: title.to_string(),
        subtitle: None,
        article_url: format!("https://www.gov.uk/news/{id}"),
        date_published: NaiveDate::from_ymd_opt(2024, 7, 12),
        date_fetched: NaiveDate::from_ymd_opt(2024, 7, 12)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
        source_id: 1,
        content: None,
        source: None,
    }
}

#[test]
fn home_loading_shows_notice() {
    let state = AppState::new();
    let term = render(&state);
    assert!(term.buffer_contains("Loading immigration updates"));
    assert!(term.buffer_contains("NextStep"));
}

#[test]
fn home_ready_shows_country_card() {
    let mut state = AppState::new();
    let card = build_country_display(CountryId::Uk, &[article(1, "Visa rules refreshed")]);
    state.home = HomePhase::Ready {
        cards: vec![card],
        selected: 0,
    };
    let term = render(&state);
    assert!(term.buffer_contains("United Kingdom"));
    assert!(term.buffer_contains("Visa rules refreshed"));
    assert!(term.buffer_contains("[visa]"));
    assert!(term.buffer_contains("Last updated: 2024-07-12"));
}

#[test]
fn home_failed_shows_error_and_reload_hint() {
    let mut state = AppState::new();
    state.home = HomePhase::Failed {
        message: "Country not found".to_string(),
    };
    let term = render(&state);
    assert!(term.buffer_contains("Unable to load countries"));
    assert!(term.buffer_contains("Country not found"));
    assert!(term.buffer_contains("Press r to reload"));
}

#[test]
fn detail_not_found_shows_panel_and_home_hint() {
    let mut state = AppState::new();
    state.route = Route::Country {
        id: "ca".to_string(),
    };
    state.detail = DetailPhase::NotFound;
    let term = render(&state);
    assert!(term.buffer_contains("Country not found"));
    assert!(term.buffer_contains("Press Esc or h to go back home"));
}

#[test]
fn detail_ready_with_empty_articles_shows_placeholder() {
    let mut state = AppState::new();
    state.route = Route::Country {
        id: "uk".to_string(),
    };
    state.detail = DetailPhase::Ready {
        display: build_country_display(CountryId::Uk, &[]),
        articles: Vec::new(),
        selected: 0,
    };
    let term = render(&state);
    assert!(term.buffer_contains("United Kingdom"));
    assert!(term.buffer_contains("No recent updates yet"));
    // An empty list is not an error state
    assert!(!term.buffer_contains("Connection failed"));
}

#[test]
fn detail_ready_lists_articles() {
    let mut state = AppState::new();
    state.route = Route::Country {
        id: "uk".to_string(),
    };
    let articles = vec![article(1, "Sponsor licence guidance"), article(2, "Points update")];
    state.detail = DetailPhase::Ready {
        display: build_country_display(CountryId::Uk, &articles),
        articles,
        selected: 0,
    };
    let term = render(&state);
    assert!(term.buffer_contains("Latest Updates"));
    assert!(term.buffer_contains("Sponsor licence guidance"));
    assert!(term.buffer_contains("Points update"));
}

#[test]
fn detail_failed_shows_connection_panel() {
    let mut state = AppState::new();
    state.route = Route::Country {
        id: "uk".to_string(),
    };
    state.detail = DetailPhase::Failed {
        message: "Cannot reach the NextStep backend".to_string(),
    };
    let term = render(&state);
    assert!(term.buffer_contains("Connection failed"));
    assert!(term.buffer_contains("Cannot reach the NextStep backend"));
}

#[test]
fn status_note_overrides_hints() {
    let mut state = AppState::new();
    state.status = Some("Opened in browser".to_string());
    let term = render(&state);
    assert!(term.buffer_contains("Opened in browser"));
}
