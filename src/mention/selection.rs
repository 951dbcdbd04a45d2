//! Selection cursor for the dropdown candidate list.

/// Tracks which candidate is currently selected (if any).
///
/// `None` means the list is empty; a non-empty list always has a selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Reset to the first candidate (or no selection for an empty list).
    pub fn select_first(&mut self, candidate_count: usize) {
        self.selected = if candidate_count > 0 { Some(0) } else { None };
    }

    /// Clear the current selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Move to the next candidate, wrapping to the first at the end.
    /// Does nothing when the list is empty.
    pub fn navigate_next(&mut self, candidate_count: usize) {
        if candidate_count == 0 {
            return;
        }

        self.selected = match self.selected {
            Some(current) => Some((current + 1) % candidate_count),
            None => Some(0),
        };
    }

    /// Move to the previous candidate, wrapping to the last at the start.
    /// Does nothing when the list is empty.
    pub fn navigate_previous(&mut self, candidate_count: usize) {
        if candidate_count == 0 {
            return;
        }

        self.selected = match self.selected {
            Some(0) | None => Some(candidate_count - 1),
            Some(current) => Some(current - 1),
        };
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
