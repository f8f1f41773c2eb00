//! Async side effects described by `update` and executed by the runner
//!
//! The update function never touches the network. It returns a [`Task`]
//! and the runner executes it against the [`ApiClient`] it owns, feeding
//! the resulting [`Message`] back into the update loop.

use tracing::{debug, warn};

use nextstep_api::ApiClient;
use nextstep_core::CountryId;

use crate::message::Message;

/// Number of recent articles shown on the detail page.
pub const DETAIL_RECENT_LIMIT: usize = 10;

/// A side effect requested by the update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Load the aggregate card data for every registered country.
    LoadHome { seq: u64 },

    /// Load metadata plus the recent article list for one country.
    /// Only spawned for identifiers that parsed to a known [`CountryId`].
    LoadCountry { seq: u64, country: CountryId },

    /// Open an article's source URL in the system browser.
    OpenArticle { url: String },
}

/// Execute one task to completion, returning the follow-up message.
///
/// The client is an explicit dependency so tests can point it at a mock
/// backend.
pub async fn run_task(api: &ApiClient, task: Task) -> Option<Message> {
    match task {
        Task::LoadHome { seq } => {
            debug!("loading home listing (seq {seq})");
            let mut cards = Vec::new();
            for country in CountryId::ALL {
                // Never errors: transport failures come back as fallback
                // records and unknown ids cannot appear in the registry.
                if let Some(display) = api.country_data(country.as_str()).await {
                    cards.push(display);
                }
            }
            Some(Message::HomeLoaded {
                seq,
                result: Ok(cards),
            })
        }

        Task::LoadCountry { seq, country } => {
            debug!("loading detail for {country} (seq {seq})");
            // Two independent requests; both must complete before the view
            // leaves its loading state.
            let (display, articles) = tokio::join!(
                api.country_data(country.as_str()),
                api.recent_articles(DETAIL_RECENT_LIMIT)
            );
            let result = match articles {
                Ok(articles) => Ok((display, articles)),
                Err(err) => {
                    warn!("detail load for {country} failed: {err}");
                    Err("Cannot reach the NextStep backend".to_string())
                }
            };
            Some(Message::DetailLoaded { seq, result })
        }

        Task::OpenArticle { url } => match open::that(&url) {
            Ok(()) => Some(Message::Status("Opened in browser".to_string())),
            Err(err) => {
                warn!("could not open {url}: {err}");
                Some(Message::Status(format!("Could not open browser: {err}")))
            }
        },
    }
}
