//! Mouse click handling
//!
//! Clicks inside a dropdown commit the clicked suggestion; clicks on an
//! input move focus there; clicks anywhere else dismiss every open
//! dropdown, mirroring a document-level outside-click listener.

use crate::layout::{Region, region_at};
use crate::mention::{DropdownArea, DropdownPhase};

use super::state::{App, ComposerState, Focus};

/// Handle a left mouse button click at the given screen position.
pub fn handle_click(app: &mut App, column: u16, row: u16) {
    match region_at(&app.regions, column, row) {
        Some(Region::CommentDropdown) => {
            if let Some(area) = app.comment_dropdown_area {
                click_dropdown(&mut app.comment, area, row);
            }
        }
        Some(Region::ReplyDropdown) => {
            if let Some(area) = app.reply_dropdown_area {
                click_dropdown(&mut app.reply, area, row);
            }
        }
        Some(Region::CommentInput) => {
            app.reply.mention.hide();
            app.focus = Focus::CommentBox;
        }
        Some(Region::ReplyInput) => {
            app.comment.mention.hide();
            app.focus = Focus::ReplyBox;
        }
        None => {
            app.comment.mention.hide();
            app.reply.mention.hide();
        }
    }
}

/// A click on a candidate row commits that candidate. Clicks on the border
/// rows or on a status row (loading, empty, error) do nothing.
fn click_dropdown(composer: &mut ComposerState, area: DropdownArea, row: u16) {
    if composer.mention.dropdown().phase() != DropdownPhase::ListShown {
        return;
    }

    let Some(offset) = row.checked_sub(area.area.y + 1) else {
        return;
    };
    if offset >= area.area.height.saturating_sub(2) {
        return;
    }

    let index = area.window_start + offset as usize;
    if let Some(user) = composer.mention.dropdown().candidates().get(index) {
        let username = user.username.clone();
        composer.insert_selected(&username);
    }
}

#[cfg(test)]
#[path = "mouse_tests.rs"]
mod mouse_tests;
