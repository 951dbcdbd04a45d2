//! Suggestion dropdown state machine.
//!
//! Phases: `Hidden → Loading` on dispatch, `Loading → ListShown /
//! EmptyShown / ErrorShown` on the outcome, anything back to `Hidden` on
//! trigger deactivation. Navigation mutates only the selection index.

use crate::search::UserCandidate;

use super::selection::SelectionState;

/// Visible phase of the suggestion dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownPhase {
    #[default]
    Hidden,
    Loading,
    ListShown,
    EmptyShown,
    ErrorShown,
}

/// Candidate list, selection cursor, and phase for one mention dropdown
#[derive(Debug, Default)]
pub struct DropdownState {
    phase: DropdownPhase,
    candidates: Vec<UserCandidate>,
    selection: SelectionState,
    error: Option<String>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DropdownPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != DropdownPhase::Hidden
    }

    pub fn candidates(&self) -> &[UserCandidate] {
        &self.candidates
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected()
    }

    /// The candidate the selection cursor sits on, if the list is shown.
    pub fn selected(&self) -> Option<&UserCandidate> {
        self.selection
            .selected()
            .and_then(|i| self.candidates.get(i))
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A search was dispatched: show the loading row and drop the previous
    /// list so a stale selection can never be committed.
    pub fn begin_loading(&mut self) {
        self.phase = DropdownPhase::Loading;
        self.candidates.clear();
        self.selection.clear();
        self.error = None;
    }

    /// Apply a live result set; an empty list is the "no results" state.
    /// Selection resets to the first candidate.
    pub fn apply_results(&mut self, users: Vec<UserCandidate>) {
        self.error = None;
        self.candidates = users;
        self.selection.select_first(self.candidates.len());
        self.phase = if self.candidates.is_empty() {
            DropdownPhase::EmptyShown
        } else {
            DropdownPhase::ListShown
        };
    }

    /// Apply a live failure: error row, no candidates. The next dispatch
    /// re-enters `Loading` normally.
    pub fn apply_failure(&mut self, message: String) {
        self.candidates.clear();
        self.selection.clear();
        self.error = Some(message);
        self.phase = DropdownPhase::ErrorShown;
    }

    /// Deactivation: clear everything and hide. Safe to call repeatedly.
    pub fn hide(&mut self) {
        self.phase = DropdownPhase::Hidden;
        self.candidates.clear();
        self.selection.clear();
        self.error = None;
    }

    /// Move the selection down, wrapping. Only meaningful with a shown
    /// non-empty list.
    pub fn navigate_next(&mut self) {
        if self.phase == DropdownPhase::ListShown {
            self.selection.navigate_next(self.candidates.len());
        }
    }

    /// Move the selection up, wrapping.
    pub fn navigate_previous(&mut self) {
        if self.phase == DropdownPhase::ListShown {
            self.selection.navigate_previous(self.candidates.len());
        }
    }
}

#[cfg(test)]
#[path = "dropdown_state_tests.rs"]
mod dropdown_state_tests;
