//! Trigger detection for an in-progress `@mention` token.
//!
//! The trigger is active exactly when the text immediately before the
//! cursor is an `@` followed by zero or more word characters, ending at the
//! cursor. A bare `@` is a valid trigger with an empty term (used to ask
//! the endpoint for its default list).

/// An active mention trigger at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTrigger {
    /// Search term typed after the `@` (may be empty)
    pub term: String,
    /// Byte offset of the `@` character in the line
    pub start: usize,
}

/// Word characters are ASCII alphanumerics plus underscore, the same set
/// the endpoint accepts in usernames.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Clamp a byte offset to the nearest char boundary at or before it.
pub(crate) fn clamp_to_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Inspect the text before the cursor and report the active trigger, if any.
///
/// `cursor` is a byte offset; anything past the end of the line or inside a
/// multi-byte character is clamped back to a valid boundary.
pub fn detect(line: &str, cursor: usize) -> Option<ActiveTrigger> {
    let cursor = clamp_to_char_boundary(line, cursor);
    let bytes = line.as_bytes();

    // Walk back over word characters to the nearest candidate `@`. Word
    // characters are ASCII, so a byte scan is safe here.
    let mut start = cursor;
    while start > 0 && bytes[start - 1].is_ascii() && is_word_char(bytes[start - 1] as char) {
        start -= 1;
    }

    if start == 0 || bytes[start - 1] != b'@' {
        return None;
    }

    Some(ActiveTrigger {
        term: line[start..cursor].to_string(),
        start: start - 1,
    })
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod trigger_tests;
