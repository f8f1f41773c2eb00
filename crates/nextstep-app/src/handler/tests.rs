//! State transition tests for the update function

use chrono::NaiveDate;

use nextstep_core::{build_country_display, Article, CountryId};

use crate::handler::{update, UpdateAction, UpdateResult};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, DetailPhase, HomePhase, Route};
use crate::tasks::Task;

fn article(id: i64, title: &str) -> Article {
    Article {
        id,
        title: title.to_string(),
        subtitle: None,
        article_url: format!("https://www.gov.uk/news/{id}"),
        date_published: None,
        date_fetched: NaiveDate::from_ymd_opt(2024, 7, 12)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
        source_id: 1,
        content: None,
        source: None,
    }
}

fn spawned_task(result: &UpdateResult) -> Option<&Task> {
    match &result.action {
        Some(UpdateAction::SpawnTask(task)) => Some(task),
        None => None,
    }
}

fn ready_home_state() -> AppState {
    let mut state = AppState::new();
    let seq = state.next_seq();
    let card = build_country_display(CountryId::Uk, &[article(1, "Visa update")]);
    update(
        &mut state,
        Message::HomeLoaded {
            seq,
            result: Ok(vec![card]),
        },
    );
    state
}

#[test]
fn navigate_to_unknown_country_is_not_found_with_zero_network_calls() {
    let mut state = AppState::new();
    let result = update(
        &mut state,
        Message::NavigateCountry {
            id: "ca".to_string(),
        },
    );

    assert_eq!(state.route, Route::Country { id: "ca".to_string() });
    assert_eq!(state.detail, DetailPhase::NotFound);
    // No task spawned: nothing will touch the network for this route
    assert!(result.action.is_none());
}

#[test]
fn navigate_to_uk_enters_loading_and_spawns_detail_task() {
    let mut state = AppState::new();
    let result = update(
        &mut state,
        Message::NavigateCountry {
            id: "uk".to_string(),
        },
    );

    assert_eq!(state.detail, DetailPhase::Loading);
    assert_eq!(
        spawned_task(&result),
        Some(&Task::LoadCountry {
            seq: state.request_seq,
            country: CountryId::Uk
        })
    );
}

#[test]
fn navigate_home_resets_to_loading_and_spawns_home_task() {
    let mut state = ready_home_state();
    let result = update(&mut state, Message::NavigateHome);

    assert_eq!(state.route, Route::Home);
    assert_eq!(state.home, HomePhase::Loading);
    assert_eq!(
        spawned_task(&result),
        Some(&Task::LoadHome {
            seq: state.request_seq
        })
    );
}

#[test]
fn home_loaded_with_cards_is_ready() {
    let state = ready_home_state();
    match &state.home {
        HomePhase::Ready { cards, selected } => {
            assert_eq!(cards.len(), 1);
            assert_eq!(*selected, 0);
            assert_eq!(cards[0].name, "United Kingdom");
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[test]
fn home_loaded_with_no_cards_is_failed() {
    let mut state = AppState::new();
    let seq = state.next_seq();
    update(
        &mut state,
        Message::HomeLoaded {
            seq,
            result: Ok(Vec::new()),
        },
    );
    assert!(matches!(
        &state.home,
        HomePhase::Failed { message } if message == "Country not found"
    ));
}

#[test]
fn stale_home_load_is_discarded() {
    let mut state = AppState::new();
    let stale_seq = state.next_seq();
    // A navigation happened after the task was spawned
    state.next_seq();

    update(
        &mut state,
        Message::HomeLoaded {
            seq: stale_seq,
            result: Ok(vec![build_country_display(CountryId::Uk, &[])]),
        },
    );
    assert_eq!(state.home, HomePhase::Loading);
}

#[test]
fn stale_detail_load_does_not_mutate_after_leaving_the_view() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::NavigateCountry {
            id: "uk".to_string(),
        },
    );
    let stale_seq = state.request_seq;

    // View unmounts before the task lands
    update(&mut state, Message::NavigateHome);

    update(
        &mut state,
        Message::DetailLoaded {
            seq: stale_seq,
            result: Ok((
                Some(build_country_display(CountryId::Uk, &[])),
                vec![article(1, "Late arrival")],
            )),
        },
    );
    assert!(!matches!(state.detail, DetailPhase::Ready { .. }));
}

#[test]
fn detail_loaded_with_empty_articles_is_ready_not_failed() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::NavigateCountry {
            id: "uk".to_string(),
        },
    );
    let seq = state.request_seq;
    update(
        &mut state,
        Message::DetailLoaded {
            seq,
            result: Ok((Some(build_country_display(CountryId::Uk, &[])), Vec::new())),
        },
    );
    match &state.detail {
        DetailPhase::Ready { articles, .. } => assert!(articles.is_empty()),
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[test]
fn detail_loaded_error_is_failed() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::NavigateCountry {
            id: "uk".to_string(),
        },
    );
    let seq = state.request_seq;
    update(
        &mut state,
        Message::DetailLoaded {
            seq,
            result: Err("Cannot reach the NextStep backend".to_string()),
        },
    );
    assert!(matches!(state.detail, DetailPhase::Failed { .. }));
}

#[test]
fn detail_loaded_with_absent_metadata_is_not_found() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::NavigateCountry {
            id: "uk".to_string(),
        },
    );
    let seq = state.request_seq;
    update(
        &mut state,
        Message::DetailLoaded {
            seq,
            result: Ok((None, Vec::new())),
        },
    );
    assert_eq!(state.detail, DetailPhase::NotFound);
}

#[test]
fn quit_keys_set_should_quit() {
    for key in [InputKey::Char('q'), InputKey::CharCtrl('c')] {
        let mut state = AppState::new();
        let result = update(&mut state, Message::Key(key));
        let follow_up = result.message.expect("quit message");
        update(&mut state, follow_up);
        assert!(state.should_quit);
    }
}

#[test]
fn reload_on_home_renavigates_home() {
    let mut state = ready_home_state();
    let result = update(&mut state, Message::Key(InputKey::Char('r')));
    assert!(matches!(result.message, Some(Message::Reload)));
    let result = update(&mut state, Message::Reload);
    assert!(matches!(result.message, Some(Message::NavigateHome)));
}

#[test]
fn reload_on_detail_renavigates_same_country() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::NavigateCountry {
            id: "uk".to_string(),
        },
    );
    let result = update(&mut state, Message::Reload);
    assert!(matches!(
        result.message,
        Some(Message::NavigateCountry { id }) if id == "uk"
    ));
}

#[test]
fn enter_on_home_card_navigates_to_its_country() {
    let mut state = ready_home_state();
    let result = update(&mut state, Message::Key(InputKey::Enter));
    assert!(matches!(
        result.message,
        Some(Message::NavigateCountry { id }) if id == "uk"
    ));
}

#[test]
fn open_article_spawns_browser_task_without_touching_state() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::NavigateCountry {
            id: "uk".to_string(),
        },
    );
    let seq = state.request_seq;
    update(
        &mut state,
        Message::DetailLoaded {
            seq,
            result: Ok((
                Some(build_country_display(CountryId::Uk, &[])),
                vec![article(1, "First"), article(2, "Second")],
            )),
        },
    );

    // Move selection down, then open
    update(&mut state, Message::Key(InputKey::Char('j')));
    let before = state.detail.clone();
    let result = update(&mut state, Message::OpenSelectedArticle);

    assert_eq!(
        spawned_task(&result),
        Some(&Task::OpenArticle {
            url: "https://www.gov.uk/news/2".to_string()
        })
    );
    assert_eq!(state.detail, before);
}

#[test]
fn esc_from_not_found_panel_goes_home() {
    let mut state = AppState::new();
    update(
        &mut state,
        Message::NavigateCountry {
            id: "ca".to_string(),
        },
    );
    let result = update(&mut state, Message::Key(InputKey::Esc));
    assert!(matches!(result.message, Some(Message::NavigateHome)));
}

#[test]
fn selection_is_clamped_at_list_edges() {
    let mut state = ready_home_state();
    // Single card: moving around never leaves index 0
    update(&mut state, Message::Key(InputKey::Char('k')));
    update(&mut state, Message::Key(InputKey::Char('j')));
    update(&mut state, Message::Key(InputKey::Down));
    match &state.home {
        HomePhase::Ready { selected, .. } => assert_eq!(*selected, 0),
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[test]
fn status_note_is_set_and_cleared_by_next_key() {
    let mut state = ready_home_state();
    update(&mut state, Message::Status("Opened in browser".to_string()));
    assert_eq!(state.status.as_deref(), Some("Opened in browser"));
    update(&mut state, Message::Key(InputKey::Char('j')));
    assert!(state.status.is_none());
}
