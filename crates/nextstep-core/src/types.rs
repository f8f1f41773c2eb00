//! Wire types for the NextStep backend API
//!
//! These mirror the backend's JSON schemas exactly. The backend serializes
//! naive (UTC) datetimes without an offset, so datetime fields are
//! [`NaiveDateTime`] rather than `DateTime<Utc>`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One fetched news/policy item with source attribution.
///
/// Immutable once fetched; owned by the view that requested it for the
/// duration of one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub article_url: String,
    #[serde(default)]
    pub date_published: Option<NaiveDate>,
    pub date_fetched: NaiveDateTime,
    pub source_id: i64,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub source: Option<Source>,
}

impl Article {
    /// Date line for display: published date when known, fetch date otherwise.
    pub fn date_line(&self) -> String {
        match self.date_published {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => self.date_fetched.format("%Y-%m-%d").to_string(),
        }
    }

    /// Source label for display, falling back to the numeric id.
    pub fn source_line(&self) -> String {
        match &self.source {
            Some(source) => source.label.clone(),
            None => format!("source #{}", self.source_id),
        }
    }
}

/// An upstream publisher/feed the backend scrapes. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: i64,
    pub label: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub last_scraped: Option<NaiveDateTime>,
}

/// Envelope of the paged `GET /articles` endpoint.
///
/// `GET /articles/recent` returns a bare `Vec<Article>` instead -- the
/// asymmetry is part of the backend contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleList {
    pub articles: Vec<Article>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}
