//! Application state (Model in TEA pattern)

use nextstep_core::{Article, CountryDisplay};

/// Client-side route: the home listing or one country's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,

    /// Detail route. Carries the raw identifier so unrecognized ids can be
    /// routed to and shown as "not found".
    Country { id: String },
}

/// Listing view lifecycle: `loading -> ready` or `loading -> failed`.
///
/// Soft-fallback card data always counts as `Ready`; `Failed` is reserved
/// for the load task itself going wrong.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HomePhase {
    #[default]
    Loading,

    Ready {
        cards: Vec<CountryDisplay>,
        selected: usize,
    },

    Failed {
        message: String,
    },
}

/// Detail view lifecycle, keyed by the route's country identifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailPhase {
    #[default]
    Loading,

    Ready {
        display: CountryDisplay,
        articles: Vec<Article>,
        selected: usize,
    },

    /// The route identifier is not a supported country. Entered without any
    /// network traffic.
    NotFound,

    Failed {
        message: String,
    },
}

/// The whole application model. Each view owns its state exclusively;
/// nothing here is shared across tasks.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub route: Route,
    pub home: HomePhase,
    pub detail: DetailPhase,

    /// Monotonic request sequence. Bumped on every navigation; task
    /// completions carry the sequence they were spawned with, and stale
    /// completions are discarded so a finished view never mutates state.
    pub request_seq: u64,

    /// Transient status-bar note (e.g. browser-open feedback).
    pub status: Option<String>,

    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bump the request sequence, invalidating any in-flight task.
    pub fn next_seq(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    /// The card currently highlighted on the home grid, if any.
    pub fn selected_card(&self) -> Option<&CountryDisplay> {
        match &self.home {
            HomePhase::Ready { cards, selected } => cards.get(*selected),
            _ => None,
        }
    }

    /// The article currently highlighted on the detail page, if any.
    pub fn selected_article(&self) -> Option<&Article> {
        match &self.detail {
            DetailPhase::Ready {
                articles, selected, ..
            } => articles.get(*selected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_loading_on_home() {
        let state = AppState::new();
        assert_eq!(state.route, Route::Home);
        assert_eq!(state.home, HomePhase::Loading);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_next_seq_is_monotonic() {
        let mut state = AppState::new();
        let first = state.next_seq();
        let second = state.next_seq();
        assert!(second > first);
    }

    #[test]
    fn test_selected_helpers_are_none_outside_ready() {
        let state = AppState::new();
        assert!(state.selected_card().is_none());
        assert!(state.selected_article().is_none());
    }
}
