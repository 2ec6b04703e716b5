//! Web search domain entities

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Extract the hostname of an absolute URL
///
/// Returns `None` if the URL cannot be parsed or has no host. Hostnames are
/// returned lower-cased, as normalized by the URL parser.
#[must_use]
pub fn hostname_of(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}

/// Keep the first result per hostname, in order, up to `limit` results
///
/// Iteration stops as soon as `limit` results are accepted.
#[must_use]
pub fn distinct_by_host(
    results: impl IntoIterator<Item = SearchResult>,
    limit: usize,
) -> Vec<SearchResult> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for result in results {
        if kept.len() >= limit {
            break;
        }
        if seen.insert(result.source.clone()) {
            kept.push(result);
        }
    }

    kept
}

/// A single search result from the search provider listing
///
/// The URL is always an absolute http(s) URL with a host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchResult {
    /// Title of the search result as shown in the listing
    pub title: String,

    /// Destination URL of the search result
    pub url: String,

    /// Hostname of the destination (e.g., "en.wikipedia.org")
    pub source: String,
}

impl SearchResult {
    /// Create a new search result
    ///
    /// # Errors
    ///
    /// Returns an error if `url` is not an absolute http(s) URL with a host.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Result<Self, DomainError> {
        let url = url.into();
        let parsed = url::Url::parse(&url).map_err(|_| DomainError::InvalidUrl(url.clone()))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::InvalidUrl(url));
        }

        let source = parsed
            .host_str()
            .map(ToString::to_string)
            .ok_or_else(|| DomainError::MissingHost(url.clone()))?;

        Ok(Self {
            title: title.into(),
            url,
            source,
        })
    }

    /// Hostname of the result's destination
    #[must_use]
    pub fn host(&self) -> &str {
        &self.source
    }
}
