//! Search worker thread
//!
//! Performs user-search requests in a background thread so the event loop
//! never blocks on the network. Receives requests via channel, calls the
//! search backend, and answers with request-id tagged responses. The id is
//! what makes late, out-of-order responses safe: the controller applies a
//! response only when its id is still the live one.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::client::SearchBackend;
use super::types::{SearchRequest, SearchResponse};

/// Spawn the search worker thread
///
/// The thread runs until the request channel is closed (i.e. the
/// controller dropped its sender on `destroy()`).
pub fn spawn_worker(
    backend: Box<dyn SearchBackend>,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(backend.as_ref(), request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    backend: &dyn SearchBackend,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            SearchRequest::Query { term, request_id } => {
                // A newer query or a cancel may already be queued behind this
                // one; skip straight to the newest instead of wasting a
                // network round-trip on a result nobody will apply.
                let Some((term, request_id)) =
                    drain_superseded(&request_rx, term, request_id, &response_tx)
                else {
                    continue;
                };

                let message = match backend.search(&term) {
                    Ok(users) => SearchResponse::Results { users, request_id },
                    Err(e) => SearchResponse::Failed {
                        message: e.to_string(),
                        request_id,
                    },
                };

                if response_tx.send(message).is_err() {
                    // Main thread disconnected, stop working
                    return;
                }
            }
            SearchRequest::Cancel { request_id } => {
                // Cancel received when no request is in-flight - just acknowledge
                let _ = response_tx.send(SearchResponse::Cancelled { request_id });
                log::debug!("cancelled request {} (no active request)", request_id);
            }
        }
    }

    log::debug!("search worker thread shutting down");
}

/// Drain queued messages before issuing a query.
///
/// Returns the newest queued query (or the original one), or `None` when a
/// matching cancel arrived first.
fn drain_superseded(
    request_rx: &Receiver<SearchRequest>,
    mut term: String,
    mut request_id: u64,
    response_tx: &Sender<SearchResponse>,
) -> Option<(String, u64)> {
    loop {
        match request_rx.try_recv() {
            Ok(SearchRequest::Query {
                term: newer_term,
                request_id: newer_id,
            }) => {
                log::debug!("superseding request {} with {}", request_id, newer_id);
                term = newer_term;
                request_id = newer_id;
            }
            Ok(SearchRequest::Cancel {
                request_id: cancel_id,
            }) => {
                if cancel_id == request_id {
                    let _ = response_tx.send(SearchResponse::Cancelled {
                        request_id: cancel_id,
                    });
                    return None;
                }
                // Cancel for an older request - already superseded, ignore
                log::debug!(
                    "ignoring cancel for request {} (current: {})",
                    cancel_id,
                    request_id
                );
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {
                return Some((term, request_id));
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
