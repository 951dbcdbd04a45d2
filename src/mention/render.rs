//! Mention dropdown rendering
//!
//! Draws the suggestion dropdown directly below its text input and reports
//! the drawn area back so mouse events can be hit-tested against it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::widgets::popup;

use super::dropdown_state::{DropdownPhase, DropdownState};
use super::rows::{mention_rows, visible_window};

const MAX_POPUP_WIDTH: usize = 48;
const MIN_POPUP_WIDTH: usize = 24;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 1;

const LOADING_TEXT: &str = "Searching users…";
const EMPTY_TEXT: &str = "No users found";

/// Where the dropdown landed on screen this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownArea {
    pub area: Rect,
    /// Index of the first candidate row drawn (scroll window start)
    pub window_start: usize,
}

/// Render the dropdown below `anchor`. Returns `None` while hidden.
pub fn render_dropdown(
    frame: &mut Frame,
    dropdown: &DropdownState,
    anchor: Rect,
    max_visible: usize,
) -> Option<DropdownArea> {
    let (items, window_start) = match dropdown.phase() {
        DropdownPhase::Hidden => return None,
        DropdownPhase::Loading => (vec![status_item(LOADING_TEXT, Color::DarkGray)], 0),
        DropdownPhase::EmptyShown => (vec![status_item(EMPTY_TEXT, Color::DarkGray)], 0),
        DropdownPhase::ErrorShown => {
            let message = dropdown.error().unwrap_or("Search failed");
            (vec![status_item(message, Color::Red)], 0)
        }
        DropdownPhase::ListShown => candidate_items(dropdown, max_visible),
    };

    let popup_height = items.len() as u16 + POPUP_BORDER_HEIGHT;
    let popup_width = popup_width_for(&items);
    let popup_area = popup::popup_below_anchor(
        frame.area(),
        anchor,
        popup_width,
        popup_height,
        POPUP_OFFSET_X,
    );
    if popup_area.height == 0 || popup_area.width == 0 {
        return None;
    }

    popup::clear_area(frame, popup_area);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(list, popup_area);

    Some(DropdownArea {
        area: popup_area,
        window_start,
    })
}

fn status_item(text: &str, color: Color) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        format!("  {}", text),
        Style::default().fg(color).bg(Color::Black),
    )))
}

fn candidate_items(dropdown: &DropdownState, max_visible: usize) -> (Vec<ListItem<'static>>, usize) {
    let rows = mention_rows(dropdown.candidates(), dropdown.selected_index());
    let start = visible_window(rows.len(), dropdown.selected_index(), max_visible);

    let items = rows
        .into_iter()
        .skip(start)
        .take(max_visible.max(1))
        .map(|row| {
            let display = row
                .display_name
                .as_deref()
                .map(|name| format!("  {}", name))
                .unwrap_or_default();

            let line = if row.is_selected {
                Line::from(vec![
                    Span::styled(
                        format!("► {} @{}", row.initials, row.username),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(display, Style::default().fg(Color::Black).bg(Color::Cyan)),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {} @{}", row.initials, row.username),
                        Style::default().fg(Color::White).bg(Color::Black),
                    ),
                    Span::styled(display, Style::default().fg(Color::DarkGray).bg(Color::Black)),
                ])
            };
            ListItem::new(line)
        })
        .collect();

    (items, start)
}

fn popup_width_for(items: &[ListItem]) -> u16 {
    let max_text_width = items
        .iter()
        .map(|item| item.width())
        .max()
        .unwrap_or(MIN_POPUP_WIDTH)
        .clamp(MIN_POPUP_WIDTH, MAX_POPUP_WIDTH);
    max_text_width as u16 + POPUP_PADDING
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
