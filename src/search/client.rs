//! Blocking HTTP client for the user-search endpoint.
//!
//! Runs on the worker thread, never on the event loop. The endpoint
//! contract is `GET <url>?q=<term>` returning `{"users": [...]}`.

use thiserror::Error;

use super::types::{SearchResults, UserCandidate};

/// Errors that can occur during a user search
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network-level failure (DNS, refused connection, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-2xx status
    #[error("Search endpoint returned status {0}")]
    Status(u16),

    /// Response body could not be read
    #[error("Unreadable response body: {0}")]
    Body(String),

    /// Response body was not the expected JSON shape
    #[error("Malformed response body: {0}")]
    Parse(String),
}

/// Seam between the worker loop and the HTTP transport, so tests can
/// substitute a scripted backend.
pub trait SearchBackend: Send {
    fn search(&self, term: &str) -> Result<Vec<UserCandidate>, SearchError>;
}

/// Real endpoint client
#[derive(Debug, Clone)]
pub struct UserSearchClient {
    search_url: String,
}

impl UserSearchClient {
    pub fn new(search_url: impl Into<String>) -> Self {
        Self {
            search_url: search_url.into(),
        }
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }
}

impl SearchBackend for UserSearchClient {
    fn search(&self, term: &str) -> Result<Vec<UserCandidate>, SearchError> {
        let response = ureq::get(&self.search_url)
            .query("q", term)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => SearchError::Status(code),
                ureq::Error::Transport(transport) => SearchError::Network(transport.to_string()),
            })?;

        let body = response
            .into_string()
            .map_err(|e| SearchError::Body(e.to_string()))?;

        parse_results(&body)
    }
}

/// Parse the endpoint body. A missing or null `users` field is an empty
/// result set, not an error.
pub fn parse_results(body: &str) -> Result<Vec<UserCandidate>, SearchError> {
    let results: SearchResults =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;
    Ok(results.users.unwrap_or_default())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
