//! Mention insertion: replace the active `@word` token with the chosen
//! username and restore the cursor just after the inserted space.

use tui_textarea::{CursorMove, TextArea};

use super::trigger;

/// Pure splice: replaces the trailing `@word` ending at `cursor` (a byte
/// offset) with `@username ` and returns the new text plus the new cursor
/// byte offset. Text strictly after the original cursor is never touched.
///
/// Returns `None` when no token ends at the cursor.
pub fn splice_mention(text: &str, cursor: usize, username: &str) -> Option<(String, usize)> {
    let token = trigger::detect(text, cursor)?;
    let cursor = trigger::clamp_to_char_boundary(text, cursor);

    let mut out = String::with_capacity(text.len() + username.len() + 2);
    out.push_str(&text[..token.start]);
    out.push('@');
    out.push_str(username);
    out.push(' ');
    let new_cursor = out.len();
    out.push_str(&text[cursor..]);

    Some((out, new_cursor))
}

/// Apply the splice to the textarea's current line.
///
/// Returns false (leaving the textarea untouched) when no token ends at
/// the cursor, e.g. the text changed under a late click.
pub fn insert_mention(textarea: &mut TextArea<'_>, username: &str) -> bool {
    let (row, col) = textarea.cursor();
    let line = textarea.lines()[row].clone();
    let byte_cursor = byte_offset_of_col(&line, col);

    let Some((new_line, new_cursor)) = splice_mention(&line, byte_cursor, username) else {
        return false;
    };

    // Rebuild the whole line; deleting only up to the cursor would leave
    // the tail duplicated after insert_str.
    textarea.delete_line_by_head();
    textarea.delete_line_by_end();
    textarea.insert_str(&new_line);
    move_cursor_to_column(textarea, col_of_byte_offset(&new_line, new_cursor));

    true
}

/// Character column of a byte offset (tui-textarea cursors are char based).
pub fn col_of_byte_offset(line: &str, offset: usize) -> usize {
    line[..offset.min(line.len())].chars().count()
}

/// Byte offset of a character column.
pub fn byte_offset_of_col(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

/// Walk the cursor to a character column on the current line.
pub fn move_cursor_to_column(textarea: &mut TextArea<'_>, column: usize) {
    textarea.move_cursor(CursorMove::Head);
    for _ in 0..column {
        textarea.move_cursor(CursorMove::Forward);
    }
}

#[cfg(test)]
#[path = "insertion_tests.rs"]
mod insertion_tests;
