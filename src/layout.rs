//! Tracking of rendered UI regions for mouse hit-testing.
//!
//! The render pass records where each component landed; `region_at()` maps
//! a click position back to the component under it. Dropdowns overlay the
//! inputs, so they are tested first.

use ratatui::layout::{Position, Rect};

/// UI component a mouse event can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    CommentInput,
    CommentDropdown,
    ReplyInput,
    ReplyDropdown,
}

/// Regions recorded during the last render pass
#[derive(Debug, Default, Clone, Copy)]
pub struct LayoutRegions {
    pub comment_input: Rect,
    pub comment_dropdown: Option<Rect>,
    pub reply_input: Rect,
    pub reply_dropdown: Option<Rect>,
}

/// Which component sits under `(column, row)`, if any.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);

    // Dropdowns are overlays and win over the inputs underneath them.
    if let Some(area) = regions.comment_dropdown
        && area.contains(position)
    {
        return Some(Region::CommentDropdown);
    }
    if let Some(area) = regions.reply_dropdown
        && area.contains(position)
    {
        return Some(Region::ReplyDropdown);
    }
    if regions.comment_input.contains(position) {
        return Some(Region::CommentInput);
    }
    if regions.reply_input.contains(position) {
        return Some(Region::ReplyInput);
    }
    None
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
