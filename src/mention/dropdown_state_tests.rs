//! Tests for the dropdown state machine

use super::*;
use crate::search::UserCandidate;

fn users(names: &[&str]) -> Vec<UserCandidate> {
    names.iter().map(|name| UserCandidate::new(*name)).collect()
}

#[test]
fn test_initial_state_is_hidden() {
    let dropdown = DropdownState::new();
    assert_eq!(dropdown.phase(), DropdownPhase::Hidden);
    assert!(!dropdown.is_visible());
    assert!(dropdown.candidates().is_empty());
    assert_eq!(dropdown.selected_index(), None);
}

#[test]
fn test_hidden_to_loading_on_dispatch() {
    let mut dropdown = DropdownState::new();
    dropdown.begin_loading();
    assert_eq!(dropdown.phase(), DropdownPhase::Loading);
    assert!(dropdown.is_visible());
}

#[test]
fn test_loading_to_list_shown_on_results() {
    let mut dropdown = DropdownState::new();
    dropdown.begin_loading();
    dropdown.apply_results(users(&["alice", "bob"]));

    assert_eq!(dropdown.phase(), DropdownPhase::ListShown);
    assert_eq!(dropdown.candidates().len(), 2);
    // Selection resets to the first candidate
    assert_eq!(dropdown.selected_index(), Some(0));
    assert_eq!(dropdown.selected().unwrap().username, "alice");
}

#[test]
fn test_loading_to_empty_shown_on_empty_results() {
    let mut dropdown = DropdownState::new();
    dropdown.begin_loading();
    dropdown.apply_results(Vec::new());

    assert_eq!(dropdown.phase(), DropdownPhase::EmptyShown);
    assert_eq!(dropdown.selected_index(), None);
    assert!(dropdown.selected().is_none());
}

#[test]
fn test_loading_to_error_shown_on_failure() {
    let mut dropdown = DropdownState::new();
    dropdown.begin_loading();
    dropdown.apply_failure("Network error: connection refused".to_string());

    assert_eq!(dropdown.phase(), DropdownPhase::ErrorShown);
    assert!(dropdown.candidates().is_empty());
    assert_eq!(dropdown.error(), Some("Network error: connection refused"));
}

#[test]
fn test_error_state_is_not_sticky() {
    let mut dropdown = DropdownState::new();
    dropdown.begin_loading();
    dropdown.apply_failure("boom".to_string());

    // A subsequent dispatch re-enters Loading and clears the error
    dropdown.begin_loading();
    assert_eq!(dropdown.phase(), DropdownPhase::Loading);
    assert_eq!(dropdown.error(), None);

    dropdown.apply_results(users(&["alice"]));
    assert_eq!(dropdown.phase(), DropdownPhase::ListShown);
}

#[test]
fn test_begin_loading_drops_previous_list() {
    let mut dropdown = DropdownState::new();
    dropdown.begin_loading();
    dropdown.apply_results(users(&["alice", "bob"]));
    dropdown.navigate_next();
    assert_eq!(dropdown.selected_index(), Some(1));

    dropdown.begin_loading();
    assert!(dropdown.candidates().is_empty());
    assert_eq!(dropdown.selected_index(), None);
}

#[test]
fn test_hide_from_every_phase() {
    let mut dropdown = DropdownState::new();

    dropdown.begin_loading();
    dropdown.hide();
    assert_eq!(dropdown.phase(), DropdownPhase::Hidden);

    dropdown.begin_loading();
    dropdown.apply_results(users(&["alice"]));
    dropdown.hide();
    assert_eq!(dropdown.phase(), DropdownPhase::Hidden);
    assert!(dropdown.candidates().is_empty());

    dropdown.begin_loading();
    dropdown.apply_failure("boom".to_string());
    dropdown.hide();
    assert_eq!(dropdown.phase(), DropdownPhase::Hidden);
    assert_eq!(dropdown.error(), None);

    // Idempotent
    dropdown.hide();
    assert_eq!(dropdown.phase(), DropdownPhase::Hidden);
}

#[test]
fn test_navigation_only_in_list_shown() {
    let mut dropdown = DropdownState::new();

    // Hidden: no-op
    dropdown.navigate_next();
    assert_eq!(dropdown.selected_index(), None);

    // EmptyShown: no-op
    dropdown.begin_loading();
    dropdown.apply_results(Vec::new());
    dropdown.navigate_next();
    assert_eq!(dropdown.selected_index(), None);

    // ListShown: wraps
    dropdown.begin_loading();
    dropdown.apply_results(users(&["alice", "bob", "carol"]));
    dropdown.navigate_previous();
    assert_eq!(dropdown.selected_index(), Some(2));
    dropdown.navigate_next();
    assert_eq!(dropdown.selected_index(), Some(0));
    // Phase unchanged by navigation
    assert_eq!(dropdown.phase(), DropdownPhase::ListShown);
}
