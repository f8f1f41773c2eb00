//! # nextstep-core - Core Domain Types
//!
//! Foundation crate for NextStep. Provides the article/source wire types,
//! the country registry, display-aggregate derivation, tag extraction,
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).

pub mod country;
pub mod display;
pub mod error;
pub mod logging;
pub mod tags;
pub mod types;

/// Prelude for common imports used throughout all NextStep crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use country::CountryId;
pub use display::{build_country_display, fallback_country_display, CountryDisplay, UPDATES_CAP};
pub use error::{Error, Result};
pub use tags::{derive_tags, FALLBACK_TAGS, TAGS_CAP};
pub use types::{Article, ArticleList, Source};
