//! Country display aggregate derived from fetched articles
//!
//! `CountryDisplay` is a client-side view-model, not a backend entity. It
//! is reconstructed fresh on every view mount and never persisted.

use chrono::Utc;

use crate::country::CountryId;
use crate::tags::derive_tags;
use crate::types::Article;

/// Maximum number of update lines carried on a card.
pub const UPDATES_CAP: usize = 3;

/// Update lines shown when the backend returned no articles.
const EMPTY_UPDATES: [&str; 3] = [
    "No recent updates available",
    "Check back later for new immigration news",
    "System is monitoring for updates",
];

/// Update lines for the best-effort record when the fetch itself failed.
const OFFLINE_UPDATES: [&str; 3] = [
    "Loading recent updates...",
    "Connecting to immigration news sources",
    "Preparing latest policy information",
];

/// Tags for the best-effort record when the fetch itself failed.
const OFFLINE_TAGS: [&str; 3] = ["Loading", "Updates", "Policy"];

/// Display-ready aggregate for one country card.
///
/// Invariants: `tags` holds 1..=3 entries, `updates` is never empty, and
/// `last_update` is always a valid `YYYY-MM-DD` date string.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryDisplay {
    pub id: CountryId,
    pub name: String,
    pub flag: String,
    pub description: String,
    pub last_update: String,
    pub banner_image: String,
    pub updates: Vec<String>,
    pub tags: Vec<String>,
}

/// Build the display aggregate for a country from its fetched articles.
///
/// `last_update` is the maximum fetch date across the articles, or today
/// when the list is empty. Updates are the article titles, capped at
/// [`UPDATES_CAP`], with placeholder lines when there are none.
pub fn build_country_display(country: CountryId, articles: &[Article]) -> CountryDisplay {
    let last_update = articles
        .iter()
        .map(|article| article.date_fetched)
        .max()
        .map(|fetched| fetched.format("%Y-%m-%d").to_string())
        .unwrap_or_else(today);

    let updates: Vec<String> = if articles.is_empty() {
        EMPTY_UPDATES.iter().map(|line| line.to_string()).collect()
    } else {
        articles
            .iter()
            .take(UPDATES_CAP)
            .map(|article| article.title.clone())
            .collect()
    };

    CountryDisplay {
        id: country,
        name: country.name().to_string(),
        flag: country.flag().to_string(),
        description: country.description().to_string(),
        last_update,
        banner_image: country.banner_image().to_string(),
        updates,
        tags: derive_tags(articles),
    }
}

/// Best-effort record for when the article fetch failed outright.
///
/// The listing view treats this as renderable success data; transport
/// failures never reach the user from this path.
pub fn fallback_country_display(country: CountryId) -> CountryDisplay {
    CountryDisplay {
        id: country,
        name: country.name().to_string(),
        flag: country.flag().to_string(),
        description: country.description().to_string(),
        last_update: today(),
        banner_image: country.banner_image().to_string(),
        updates: OFFLINE_UPDATES.iter().map(|line| line.to_string()).collect(),
        tags: OFFLINE_TAGS.iter().map(|tag| tag.to_string()).collect(),
    }
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
