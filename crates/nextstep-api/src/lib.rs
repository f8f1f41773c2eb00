//! # nextstep-api - Backend API Client
//!
//! Versioned REST client for the NextStep backend. Wraps the raw article
//! endpoints and shapes their responses into display-ready aggregates,
//! absorbing transport failures into fallback data wherever the views
//! expect soft-failure semantics.

mod client;

pub use client::{ApiClient, COUNTRY_UPDATE_LIMIT, DEFAULT_BASE_URL};
