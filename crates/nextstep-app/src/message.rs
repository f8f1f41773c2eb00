//! Message types for the application (TEA pattern)

use nextstep_core::{Article, CountryDisplay};

use crate::input_key::InputKey;

/// All possible messages/events in the application.
///
/// Task-completion variants carry the request sequence they were spawned
/// with; `update` drops completions whose sequence is stale.
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from the terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the application
    Quit,

    /// Reload the current route from the backend
    Reload,

    /// Navigate to the home listing (re-fetches on every mount)
    NavigateHome,

    /// Navigate to a country detail route. The id is raw route input and
    /// may be unrecognized.
    NavigateCountry { id: String },

    /// Home listing load finished. Errors are already collapsed to a
    /// user-facing message.
    HomeLoaded {
        seq: u64,
        result: Result<Vec<CountryDisplay>, String>,
    },

    /// Detail load finished: country metadata (absent when the country is
    /// unknown to the client) plus the recent articles.
    DetailLoaded {
        seq: u64,
        result: Result<(Option<CountryDisplay>, Vec<Article>), String>,
    },

    /// Open the highlighted article's source URL in the system browser
    OpenSelectedArticle,

    /// Transient status-bar note
    Status(String),
}
