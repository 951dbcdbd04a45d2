pub mod client;
pub mod types;
pub mod worker;

// Re-export public types
pub use client::{SearchBackend, SearchError, UserSearchClient};
pub use types::{SearchRequest, SearchResponse, UserCandidate};
pub use worker::spawn_worker;
