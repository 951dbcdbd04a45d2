//! Tests for the search worker loop

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::mpsc;
use std::time::Duration;

use super::*;
use crate::search::client::SearchError;
use crate::search::types::UserCandidate;

/// Scripted backend: records the terms it was asked for and answers from a
/// fixed result or error.
struct StubBackend {
    terms: Arc<Mutex<Vec<String>>>,
    result: Result<Vec<UserCandidate>, String>,
}

impl StubBackend {
    fn returning(users: Vec<UserCandidate>) -> (Self, Arc<Mutex<Vec<String>>>) {
        let terms = Arc::new(Mutex::new(Vec::new()));
        let backend = Self {
            terms: Arc::clone(&terms),
            result: Ok(users),
        };
        (backend, terms)
    }

    fn failing(message: &str) -> Self {
        Self {
            terms: Arc::new(Mutex::new(Vec::new())),
            result: Err(message.to_string()),
        }
    }
}

impl SearchBackend for StubBackend {
    fn search(&self, term: &str) -> Result<Vec<UserCandidate>, SearchError> {
        self.terms.lock().unwrap().push(term.to_string());
        match &self.result {
            Ok(users) => Ok(users.clone()),
            Err(message) => Err(SearchError::Network(message.clone())),
        }
    }
}

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

#[test]
fn test_query_produces_tagged_results() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let (backend, terms) = StubBackend::returning(vec![UserCandidate::new("alice")]);
    spawn_worker(Box::new(backend), request_rx, response_tx);

    request_tx
        .send(SearchRequest::Query {
            term: "ali".to_string(),
            request_id: 7,
        })
        .unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        SearchResponse::Results { users, request_id } => {
            assert_eq!(request_id, 7);
            assert_eq!(users.len(), 1);
            assert_eq!(users[0].username, "alice");
        }
        other => panic!("expected Results, got {:?}", other),
    }
    assert_eq!(terms.lock().unwrap().as_slice(), ["ali"]);
}

#[test]
fn test_backend_failure_produces_failed_response() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(
        Box::new(StubBackend::failing("connection refused")),
        request_rx,
        response_tx,
    );

    request_tx
        .send(SearchRequest::Query {
            term: "bob".to_string(),
            request_id: 3,
        })
        .unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        SearchResponse::Failed {
            message,
            request_id,
        } => {
            assert_eq!(request_id, 3);
            assert!(message.contains("connection refused"));
        }
        other => panic!("expected Failed, got {:?}", other),
    }
}

#[test]
fn test_cancel_without_active_request_is_acknowledged() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let (backend, _) = StubBackend::returning(Vec::new());
    spawn_worker(Box::new(backend), request_rx, response_tx);

    request_tx
        .send(SearchRequest::Cancel { request_id: 42 })
        .unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        SearchResponse::Cancelled { request_id } => assert_eq!(request_id, 42),
        other => panic!("expected Cancelled, got {:?}", other),
    }
}

#[test]
fn test_empty_result_is_still_a_result() {
    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let (backend, _) = StubBackend::returning(Vec::new());
    spawn_worker(Box::new(backend), request_rx, response_tx);

    request_tx
        .send(SearchRequest::Query {
            term: "zz".to_string(),
            request_id: 1,
        })
        .unwrap();

    match response_rx.recv_timeout(RECV_TIMEOUT).unwrap() {
        SearchResponse::Results { users, .. } => assert!(users.is_empty()),
        other => panic!("expected Results, got {:?}", other),
    }
}
