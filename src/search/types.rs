//! User-candidate data model and search worker message types.

use serde::Deserialize;

/// One user record returned by the search endpoint, eligible for insertion.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserCandidate {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub initials: Option<String>,
}

impl UserCandidate {
    /// Create a candidate with just a username (the other fields are
    /// optional on the wire too).
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            full_name: None,
            avatar: None,
            initials: None,
        }
    }

    /// Initials shown in place of an avatar. Falls back to the uppercased
    /// first character of the username when the endpoint sent none.
    pub fn initials_fallback(&self) -> String {
        match &self.initials {
            Some(initials) if !initials.trim().is_empty() => initials.clone(),
            _ => self
                .username
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default(),
        }
    }
}

/// Wire shape of the endpoint response body. A missing or null `users`
/// field deserializes to `None` and is treated as an empty result set.
#[derive(Debug, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub users: Option<Vec<UserCandidate>>,
}

/// Request messages sent to the search worker thread
#[derive(Debug)]
pub enum SearchRequest {
    /// Look up users matching the given term
    Query {
        term: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Cancel the request with the given ID
    Cancel {
        /// ID of the request to cancel
        request_id: u64,
    },
}

/// Response messages received from the search worker thread
#[derive(Debug)]
pub enum SearchResponse {
    /// A completed lookup (an empty list is a valid result)
    Results {
        users: Vec<UserCandidate>,
        /// Request ID this result belongs to
        request_id: u64,
    },
    /// The lookup failed (network error or non-2xx status)
    Failed {
        message: String,
        /// Request ID this failure belongs to
        request_id: u64,
    },
    /// The request was cancelled before it ran
    Cancelled {
        /// Request ID that was cancelled
        request_id: u64,
    },
}
