//! Key handling per route and phase

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, DetailPhase, HomePhase, Route};

/// Map a keypress to a follow-up message, mutating selection state in
/// place where no message is needed.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Global bindings first
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Char('r') => return Some(Message::Reload),
        _ => {}
    }

    match state.route {
        Route::Home => handle_home_key(state, key),
        Route::Country { .. } => handle_detail_key(state, key),
    }
}

fn handle_home_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    let HomePhase::Ready { cards, selected } = &mut state.home else {
        return None;
    };

    match key {
        InputKey::Char('j') | InputKey::Down => {
            if !cards.is_empty() {
                *selected = (*selected + 1).min(cards.len() - 1);
            }
            None
        }
        InputKey::Char('k') | InputKey::Up => {
            *selected = selected.saturating_sub(1);
            None
        }
        InputKey::Enter => {
            let id = cards.get(*selected)?.id.as_str().to_string();
            Some(Message::NavigateCountry { id })
        }
        _ => None,
    }
}

fn handle_detail_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Back to home works from every detail phase, including the error and
    // not-found panels.
    if matches!(key, InputKey::Esc | InputKey::Char('h')) {
        return Some(Message::NavigateHome);
    }

    let DetailPhase::Ready {
        articles, selected, ..
    } = &mut state.detail
    else {
        return None;
    };

    match key {
        InputKey::Char('j') | InputKey::Down => {
            if !articles.is_empty() {
                *selected = (*selected + 1).min(articles.len() - 1);
            }
            None
        }
        InputKey::Char('k') | InputKey::Up => {
            *selected = selected.saturating_sub(1);
            None
        }
        InputKey::Enter | InputKey::Char('o') => Some(Message::OpenSelectedArticle),
        _ => None,
    }
}
