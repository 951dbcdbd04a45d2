//! Pure rendering contract for the dropdown.
//!
//! The state machine never touches a widget: it produces row descriptors
//! and a visible-window offset, and the presentation layer turns those into
//! whatever toolkit it uses.

use crate::search::UserCandidate;

/// One renderable dropdown row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionRow {
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Initials badge shown when there is no avatar
    pub initials: String,
    pub is_selected: bool,
}

/// Describe every candidate as a row, marking the selected one.
pub fn mention_rows(candidates: &[UserCandidate], selected: Option<usize>) -> Vec<MentionRow> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, user)| MentionRow {
            username: user.username.clone(),
            display_name: user.full_name.clone(),
            avatar_url: user.avatar.clone(),
            initials: user.initials_fallback(),
            is_selected: Some(i) == selected,
        })
        .collect()
}

/// First visible row index, keeping the selection on screen when the list
/// is taller than the dropdown.
pub fn visible_window(len: usize, selected: Option<usize>, max_visible: usize) -> usize {
    let Some(selected) = selected else { return 0 };
    if max_visible == 0 || len <= max_visible {
        return 0;
    }
    let last_start = len - max_visible;
    selected
        .saturating_sub(max_visible.saturating_sub(1))
        .min(last_start)
}

#[cfg(test)]
#[path = "rows_tests.rs"]
mod rows_tests;
