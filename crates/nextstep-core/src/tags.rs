//! Keyword-based tag derivation for country cards
//!
//! Scans the concatenated article text against a fixed immigration-domain
//! vocabulary. Matches are reported in vocabulary order, not relevance
//! order, so the result is deterministic for a given input.

use crate::types::Article;

/// Maximum number of tags on a card.
pub const TAGS_CAP: usize = 3;

/// Tags shown when nothing in the vocabulary matches.
pub const FALLBACK_TAGS: [&str; 3] = ["Immigration", "Policy", "Updates"];

/// Immigration-domain vocabulary, scanned in order.
const VOCABULARY: [&str; 18] = [
    "visa",
    "immigration",
    "policy",
    "brexit",
    "student",
    "work",
    "skilled",
    "family",
    "tier",
    "points",
    "sponsor",
    "application",
    "processing",
    "requirements",
    "changes",
    "announcement",
    "update",
    "guidance",
];

/// Derive up to [`TAGS_CAP`] tags from the articles' combined text.
///
/// Title, subtitle, and content of every article are lowercased and
/// concatenated; the first [`TAGS_CAP`] vocabulary terms found as substrings
/// become the tags. Falls back to [`FALLBACK_TAGS`] when nothing matches,
/// so the result is never empty.
pub fn derive_tags(articles: &[Article]) -> Vec<String> {
    let haystack = articles
        .iter()
        .map(|article| {
            format!(
                "{} {} {}",
                article.title,
                article.subtitle.as_deref().unwrap_or(""),
                article.content.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let found: Vec<String> = VOCABULARY
        .iter()
        .filter(|term| haystack.contains(**term))
        .take(TAGS_CAP)
        .map(|term| term.to_string())
        .collect();

    if found.is_empty() {
        FALLBACK_TAGS.iter().map(|tag| tag.to_string()).collect()
    } else {
        found
    }
}
