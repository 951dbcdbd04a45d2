//! Mention controller: one instance per text input.
//!
//! Ties the trigger detector, the debounced dispatcher, the dropdown state
//! machine, and the search worker together. The controller owns its worker
//! channels, debounce timer, and request counter exclusively, so any number
//! of mention-enabled inputs can live on one screen without shared state.
//!
//! Race safety: every dispatched search carries a fresh `request_id`; a
//! response is applied only while its id is the live one. Cancellation of
//! the underlying transport is never assumed; a stale request that
//! completes late is simply ignored.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::search::{
    SearchBackend, SearchRequest, SearchResponse, UserSearchClient, spawn_worker,
};

use super::debouncer::Debouncer;
use super::dropdown_state::{DropdownPhase, DropdownState};
use super::trigger;

/// Tunables for one controller instance
#[derive(Debug, Clone)]
pub struct MentionConfig {
    /// Quiet period between the last edit and the dispatched search
    pub debounce_ms: u64,
    /// Minimum term length before a search is issued. The default of 0
    /// means a bare `@` queries the endpoint with an empty term and the
    /// endpoint decides what a default list looks like.
    pub min_term_len: usize,
}

impl Default for MentionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_term_len: 0,
        }
    }
}

/// What the caller should do with a key event it offered to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a dropdown key; feed it to the textarea as usual
    Ignored,
    /// Consumed by the dropdown (navigation, dismiss)
    Consumed,
    /// Commit this username into the text input
    Insert(String),
}

type ContentChangedFn = Box<dyn FnMut()>;

/// Mention autocomplete controller for a single text input
pub struct MentionController {
    config: MentionConfig,
    dropdown: DropdownState,
    debouncer: Debouncer,
    /// Channel to the worker thread; `None` means the controller is inert
    /// (setup failed or it was destroyed)
    request_tx: Option<Sender<SearchRequest>>,
    response_rx: Option<Receiver<SearchResponse>>,
    /// Monotonic id; only a response bearing the current id is applied
    request_id: u64,
    in_flight_request_id: Option<u64>,
    /// Term of the active trigger; `None` while the trigger is inactive
    active_term: Option<String>,
    /// Host-provided hook invoked after every insertion, so the host can
    /// resize or persist without the controller knowing about it
    on_content_changed: Option<ContentChangedFn>,
}

impl MentionController {
    /// Create a controller bound to the given search endpoint.
    ///
    /// An unusable endpoint degrades to an inert controller: the failure is
    /// logged, nothing is thrown, and every operation becomes a no-op.
    pub fn new(search_url: &str, config: MentionConfig) -> Self {
        if search_url.trim().is_empty() {
            log::warn!("mention search disabled: no search endpoint configured");
            return Self::inert(config);
        }
        Self::with_backend(Box::new(UserSearchClient::new(search_url)), config)
    }

    /// Create a controller over an explicit search backend (tests, or hosts
    /// that bring their own transport).
    pub fn with_backend(backend: Box<dyn SearchBackend>, config: MentionConfig) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(backend, request_rx, response_tx);

        Self {
            debouncer: Debouncer::new(config.debounce_ms),
            config,
            dropdown: DropdownState::new(),
            request_tx: Some(request_tx),
            response_rx: Some(response_rx),
            request_id: 0,
            in_flight_request_id: None,
            active_term: None,
            on_content_changed: None,
        }
    }

    fn inert(config: MentionConfig) -> Self {
        Self {
            debouncer: Debouncer::new(config.debounce_ms),
            config,
            dropdown: DropdownState::new(),
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
            active_term: None,
            on_content_changed: None,
        }
    }

    /// Inert controllers ignore every operation.
    pub fn is_inert(&self) -> bool {
        self.request_tx.is_none()
    }

    /// Register the optional content-changed hook.
    pub fn set_on_content_changed(&mut self, callback: ContentChangedFn) {
        self.on_content_changed = Some(callback);
    }

    pub fn dropdown(&self) -> &DropdownState {
        &self.dropdown
    }

    /// Whether a trigger is currently active (dropdown shown or pending).
    pub fn is_active(&self) -> bool {
        self.active_term.is_some()
    }

    pub fn active_term(&self) -> Option<&str> {
        self.active_term.as_deref()
    }

    /// Current request id (the only one a response may be applied under).
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    /// Re-evaluate the trigger after a text edit.
    ///
    /// `cursor` is a byte offset into `line`. An active trigger
    /// (re)schedules the debounced search with the latest term; anything
    /// else deactivates, which synchronously hides the dropdown and cancels
    /// scheduled or in-flight work.
    pub fn handle_edit(&mut self, line: &str, cursor: usize) {
        if self.is_inert() {
            return;
        }

        match trigger::detect(line, cursor) {
            Some(token) if token.term.len() >= self.config.min_term_len => {
                self.active_term = Some(token.term.clone());
                self.cancel_in_flight();
                self.debouncer.schedule(token.term);
            }
            _ => self.hide(),
        }
    }

    /// Fire the debounced search if its quiet period elapsed, then apply
    /// any worker responses. Call once per event-loop iteration.
    pub fn tick(&mut self) {
        if let Some(term) = self.debouncer.take_due() {
            self.dispatch_search(term);
        }
        self.poll_responses();
    }

    /// Offer a key event to the dropdown before the textarea sees it.
    ///
    /// Arrow keys navigate (and suppress caret movement) only while the
    /// list is shown; Enter/Tab commit only while the list is shown;
    /// Escape dismisses unconditionally while the trigger is active.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if !self.is_active() {
            return KeyOutcome::Ignored;
        }

        let list_shown = self.dropdown.phase() == DropdownPhase::ListShown;
        match key.code {
            KeyCode::Esc => {
                self.hide();
                KeyOutcome::Consumed
            }
            KeyCode::Down if list_shown => {
                self.dropdown.navigate_next();
                KeyOutcome::Consumed
            }
            KeyCode::Up if list_shown => {
                self.dropdown.navigate_previous();
                KeyOutcome::Consumed
            }
            // Only the list phase owns Enter/Tab; in Loading/Empty/Error
            // the keys fall through to the textarea.
            KeyCode::Enter | KeyCode::Tab if list_shown => {
                match self.dropdown.selected() {
                    Some(user) => KeyOutcome::Insert(user.username.clone()),
                    None => KeyOutcome::Consumed,
                }
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Called after the chosen username was spliced into the text: notify
    /// the host's content-changed listener, then deactivate.
    pub fn after_insert(&mut self) {
        if let Some(callback) = &mut self.on_content_changed {
            callback();
        }
        self.hide();
    }

    /// Re-open the dropdown for the active trigger after an explicit
    /// `hide()`. No-op (and safe to repeat) when already visible, inactive,
    /// or inert.
    pub fn show(&mut self) {
        if self.is_inert() || self.dropdown.is_visible() {
            return;
        }
        if let Some(term) = self.active_term.clone() {
            self.dispatch_search(term);
        }
    }

    /// Hide the dropdown and forget the active trigger. Cancels the
    /// scheduled search and logically cancels in-flight work. Idempotent.
    pub fn hide(&mut self) {
        self.debouncer.cancel();
        self.cancel_in_flight();
        self.active_term = None;
        self.dropdown.hide();
    }

    /// Tear down: hide, then release the worker channel so the background
    /// thread exits. Idempotent; the controller is inert afterwards.
    pub fn destroy(&mut self) {
        self.hide();
        self.request_tx = None;
        self.response_rx = None;
    }

    fn dispatch_search(&mut self, term: String) {
        let Some(tx) = &self.request_tx else { return };

        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;
        self.in_flight_request_id = Some(request_id);
        self.dropdown.begin_loading();

        if tx.send(SearchRequest::Query { term, request_id }).is_err() {
            log::warn!("search worker unavailable");
            self.in_flight_request_id = None;
            self.dropdown.apply_failure("search unavailable".to_string());
        }
    }

    fn poll_responses(&mut self) {
        let Some(rx) = &self.response_rx else { return };

        let mut responses = Vec::new();
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        for response in responses {
            self.apply_response(response);
        }
    }

    /// Apply one worker response, honoring the staleness rule: only the
    /// response bearing the live request id may touch the dropdown.
    fn apply_response(&mut self, response: SearchResponse) {
        match response {
            SearchResponse::Results { users, request_id } => {
                if !self.is_live(request_id) {
                    log::debug!("dropping stale result for request {}", request_id);
                    return;
                }
                self.in_flight_request_id = None;
                self.dropdown.apply_results(users);
            }
            SearchResponse::Failed {
                message,
                request_id,
            } => {
                if !self.is_live(request_id) {
                    log::debug!("dropping stale failure for request {}", request_id);
                    return;
                }
                self.in_flight_request_id = None;
                self.dropdown.apply_failure(message);
            }
            SearchResponse::Cancelled { request_id } => {
                log::debug!("request {} cancelled", request_id);
            }
        }
    }

    /// A response is live when its id is both the newest issued and still
    /// in flight (deactivation clears the in-flight id, so late responses
    /// after a hide are stale too).
    fn is_live(&self, request_id: u64) -> bool {
        self.request_id == request_id && self.in_flight_request_id == Some(request_id)
    }

    fn cancel_in_flight(&mut self) {
        if let (Some(request_id), Some(tx)) = (self.in_flight_request_id, &self.request_tx)
            && tx.send(SearchRequest::Cancel { request_id }).is_ok()
        {
            log::debug!("sent cancel for request {}", request_id);
        }
        self.in_flight_request_id = None;
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
