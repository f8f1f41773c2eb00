//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use nextstep_core::CountryId;

use crate::message::Message;
use crate::state::{AppState, DetailPhase, HomePhase, Route};
use crate::tasks::Task;

use super::{keys::handle_key, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message and/or action for the runner.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            // Any keypress clears a transient status note
            state.status = None;
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        Message::NavigateHome => {
            state.route = Route::Home;
            state.home = HomePhase::Loading;
            let seq = state.next_seq();
            UpdateResult::spawn(Task::LoadHome { seq })
        }

        Message::NavigateCountry { id } => {
            state.route = Route::Country { id: id.clone() };
            let seq = state.next_seq();
            match CountryId::parse(&id) {
                Some(country) => {
                    state.detail = DetailPhase::Loading;
                    UpdateResult::spawn(Task::LoadCountry { seq, country })
                }
                None => {
                    // Unsupported id: no network traffic, straight to the
                    // not-found panel.
                    state.detail = DetailPhase::NotFound;
                    UpdateResult::none()
                }
            }
        }

        Message::Reload => match &state.route {
            Route::Home => UpdateResult::message(Message::NavigateHome),
            Route::Country { id } => UpdateResult::message(Message::NavigateCountry {
                id: id.clone(),
            }),
        },

        Message::HomeLoaded { seq, result } => {
            if seq != state.request_seq {
                debug!("dropping stale home load (seq {seq} != {})", state.request_seq);
                return UpdateResult::none();
            }
            state.home = match result {
                Ok(cards) if !cards.is_empty() => HomePhase::Ready { cards, selected: 0 },
                Ok(_) => HomePhase::Failed {
                    message: "Country not found".to_string(),
                },
                Err(message) => HomePhase::Failed { message },
            };
            UpdateResult::none()
        }

        Message::DetailLoaded { seq, result } => {
            if seq != state.request_seq {
                debug!(
                    "dropping stale detail load (seq {seq} != {})",
                    state.request_seq
                );
                return UpdateResult::none();
            }
            state.detail = match result {
                Ok((Some(display), articles)) => DetailPhase::Ready {
                    display,
                    articles,
                    selected: 0,
                },
                Ok((None, _)) => DetailPhase::NotFound,
                Err(message) => DetailPhase::Failed { message },
            };
            UpdateResult::none()
        }

        Message::OpenSelectedArticle => {
            // Side effect only; selection and state are untouched.
            match state.selected_article() {
                Some(article) => UpdateResult::spawn(Task::OpenArticle {
                    url: article.article_url.clone(),
                }),
                None => UpdateResult::none(),
            }
        }

        Message::Status(note) => {
            state.status = Some(note);
            UpdateResult::none()
        }
    }
}
