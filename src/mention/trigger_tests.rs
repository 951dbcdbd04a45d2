//! Tests for trigger detection

use super::*;
use proptest::prelude::*;

fn term_at(line: &str, cursor: usize) -> Option<String> {
    detect(line, cursor).map(|t| t.term)
}

#[test]
fn test_simple_token_at_cursor() {
    let trigger = detect("hello @ali", 10).unwrap();
    assert_eq!(trigger.term, "ali");
    assert_eq!(trigger.start, 6);
}

#[test]
fn test_bare_at_is_active_with_empty_term() {
    let trigger = detect("hello @", 7).unwrap();
    assert_eq!(trigger.term, "");
    assert_eq!(trigger.start, 6);
}

#[test]
fn test_at_start_of_line() {
    let trigger = detect("@bob", 4).unwrap();
    assert_eq!(trigger.term, "bob");
    assert_eq!(trigger.start, 0);
}

#[test]
fn test_no_at_means_inactive() {
    assert!(detect("hello world", 11).is_none());
}

#[test]
fn test_whitespace_after_at_deactivates() {
    // Cursor after "@ali " - the space ends the token
    assert!(detect("@ali ", 5).is_none());
}

#[test]
fn test_cursor_mid_token_uses_prefix_only() {
    // Cursor between 'a' and 'l' of "@ali": only "a" is the term
    assert_eq!(term_at("@ali", 2), Some("a".to_string()));
}

#[test]
fn test_cursor_on_the_at_itself_is_inactive() {
    assert!(detect("@ali", 0).is_none());
}

#[test]
fn test_underscore_and_digits_are_word_chars() {
    assert_eq!(term_at("@user_42", 8), Some("user_42".to_string()));
}

#[test]
fn test_punctuation_ends_the_token() {
    // The dot is not a word character, so there is no token at the cursor
    assert!(detect("@ali.", 5).is_none());
}

#[test]
fn test_email_like_text_still_triggers() {
    // Nothing about the char before the `@` is checked, so "foo@bar" has
    // an active trigger at the cursor.
    let trigger = detect("foo@bar", 7).unwrap();
    assert_eq!(trigger.term, "bar");
    assert_eq!(trigger.start, 3);
}

#[test]
fn test_second_at_wins() {
    let trigger = detect("@@alice", 7).unwrap();
    assert_eq!(trigger.term, "alice");
    assert_eq!(trigger.start, 1);
}

#[test]
fn test_non_ascii_letter_ends_the_token() {
    // "é" is not in the word-char set, so the scan stops there
    assert_eq!(term_at("@andré", 7), None);
    // ...but an ASCII prefix before it still works from an earlier cursor
    assert_eq!(term_at("@andré", 4), Some("and".to_string()));
}

#[test]
fn test_cursor_past_end_is_clamped() {
    assert_eq!(term_at("@ali", 400), Some("ali".to_string()));
}

#[test]
fn test_cursor_inside_multibyte_char_is_clamped_back() {
    // Offset 2 is inside the 2-byte "é"; clamps back to offset 1
    assert!(detect("é@a", 2).is_none());
    assert_eq!(term_at("é@a", 4), Some("a".to_string()));
}

#[test]
fn test_empty_line() {
    assert!(detect("", 0).is_none());
}

// Property: detect() activates iff the text before the cursor ends with
// `@` + zero or more word characters, checked against an independent
// character-wise model.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_activation_matches_model(line in "[a-zA-Z0-9_@ .é]{0,30}") {
        for cursor in 0..=line.len() {
            if !line.is_char_boundary(cursor) {
                continue;
            }
            let before = &line[..cursor];

            // Model: walk chars backwards over word chars, then require '@'
            let mut chars: Vec<char> = before.chars().collect();
            while chars.last().is_some_and(|&c| is_word_char(c)) {
                chars.pop();
            }
            let expected_active = chars.last() == Some(&'@');

            let detected = detect(&line, cursor);
            prop_assert_eq!(
                detected.is_some(),
                expected_active,
                "line={:?} cursor={}",
                line,
                cursor
            );

            if let Some(trigger) = detected {
                // The reported term is exactly the word chars before the cursor
                let token = format!("@{}", trigger.term);
                prop_assert!(before.ends_with(&token));
                prop_assert!(trigger.term.chars().all(is_word_char));
            }
        }
    }
}
