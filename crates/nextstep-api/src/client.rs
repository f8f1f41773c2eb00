//! REST client for the NextStep backend
//!
//! Two failure tiers run through this module. Hard failures (non-2xx
//! status, transport errors) surface as [`Error`] from the raw endpoint
//! methods. Soft failures are absorbed here: `country_data` falls back to a
//! best-effort record and `recent_articles_by_source` to an empty list, so
//! the listing view always has renderable data.

use std::time::Duration;

use tracing::warn;

use nextstep_core::prelude::*;
use nextstep_core::{
    build_country_display, fallback_country_display, Article, ArticleList, CountryDisplay,
    CountryId, Source,
};

/// Default backend base URL. Overridable via [`ApiClient::with_base_url`];
/// there is no config file.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Number of recent articles folded into a country card.
pub const COUNTRY_UPDATE_LIMIT: usize = 3;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the backend's versioned REST API.
///
/// Cheap to clone (the inner `reqwest::Client` is reference-counted);
/// passed as an explicit dependency into tasks rather than held as a
/// global singleton.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against the compiled-in backend URL.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Build a client against a specific base URL (tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::api(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch the display aggregate for a country.
    ///
    /// Unknown ids resolve to `None` without touching the network. For a
    /// known country, the most recent articles are fetched and folded into
    /// a [`CountryDisplay`]; a failed fetch yields the fallback record
    /// instead of an error, so the caller always has renderable data.
    pub async fn country_data(&self, id: &str) -> Option<CountryDisplay> {
        let country = CountryId::parse(id)?;
        match self.recent_articles(COUNTRY_UPDATE_LIMIT).await {
            Ok(articles) => Some(build_country_display(country, &articles)),
            Err(err) => {
                warn!("country_data({id}) fell back to placeholder data: {err}");
                Some(fallback_country_display(country))
            }
        }
    }

    /// Fetch the `limit` most recent articles across all sources.
    ///
    /// `GET /articles/recent` returns a bare array, unlike the paged
    /// endpoint's envelope. Hard failures propagate; the detail view turns
    /// them into its error state.
    pub async fn recent_articles(&self, limit: usize) -> Result<Vec<Article>> {
        let response = self
            .http
            .get(format!("{}/articles/recent", self.base_url))
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|e| Error::api(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(status.as_u16()));
        }
        response.json().await.map_err(|e| Error::api(e.to_string()))
    }

    /// Fetch a page of articles filtered by source.
    ///
    /// Returns an empty list (not an error) on any failure.
    pub async fn recent_articles_by_source(&self, source_id: i64, limit: usize) -> Vec<Article> {
        match self.articles_page(source_id, limit).await {
            Ok(list) => list.articles,
            Err(err) => {
                warn!("recent_articles_by_source({source_id}) failed: {err}");
                Vec::new()
            }
        }
    }

    async fn articles_page(&self, source_id: i64, per_page: usize) -> Result<ArticleList> {
        let response = self
            .http
            .get(format!("{}/articles", self.base_url))
            .query(&[
                ("source_id", source_id.to_string()),
                ("per_page", per_page.to_string()),
                ("page", "1".to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::api(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http(status.as_u16()));
        }
        response.json().await.map_err(|e| Error::api(e.to_string()))
    }

    /// List the known sources.
    ///
    /// The backend has no sources endpoint yet, so this probes
    /// `GET /articles/stats` as a liveness signal and returns a fixed list
    /// regardless of the probe's content. Once a real endpoint exists the
    /// stub goes away.
    pub async fn sources(&self) -> Vec<Source> {
        match self
            .http
            .get(format!("{}/articles/stats", self.base_url))
            .send()
            .await
        {
            Ok(response) if !response.status().is_success() => {
                warn!("stats probe returned HTTP {}", response.status());
            }
            Ok(_) => {}
            Err(err) => warn!("stats probe failed: {err}"),
        }
        mock_sources()
    }

    /// Reachability probe against `GET /health`. Fails closed.
    pub async fn health_check(&self) -> bool {
        match self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                warn!("health check failed: {err}");
                false
            }
        }
    }
}

fn mock_sources() -> Vec<Source> {
    vec![
        Source {
            id: 1,
            label: "Gov UK News".to_string(),
            url: "https://www.gov.uk/search/news-and-communications".to_string(),
            kind: "news".to_string(),
            last_scraped: None,
        },
        Source {
            id: 2,
            label: "Immigration Rules Updates".to_string(),
            url: "https://www.gov.uk/guidance/immigration-rules".to_string(),
            kind: "rules".to_string(),
            last_scraped: None,
        },
        Source {
            id: 3,
            label: "Parliament Updates".to_string(),
            url: "https://www.parliament.uk/business/news/".to_string(),
            kind: "parliament".to_string(),
            last_scraped: None,
        },
    ]
}
