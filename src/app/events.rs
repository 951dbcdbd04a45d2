use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::io;
use std::time::Duration;

use super::mouse;
use super::state::App;

/// How long to wait for terminal input before yielding back to the tick
/// path. Debounce deadlines and worker responses are only observed between
/// events, so this bounds their latency.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl App {
    /// Wait for the next event (or the poll interval), update application
    /// state accordingly, then run per-iteration upkeep.
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event)
                    if mouse_event.kind == MouseEventKind::Down(MouseButton::Left) =>
                {
                    mouse::handle_click(self, mouse_event.column, mouse_event.row);
                }
                _ => {}
            }
        }

        self.tick();
        Ok(())
    }

    /// Handle key press events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        let composer = self.focused_composer();

        // The dropdown sees keys before the textarea so navigation does not
        // move the caret and Enter does not insert a newline.
        if composer.handle_mention_key(key) {
            return;
        }

        let modified = composer.textarea.input(key);
        if modified {
            composer.dirty = true;
        }
        // Cursor-only movement also re-evaluates the trigger: moving the
        // caret off the token dismisses the dropdown.
        composer.after_edit();
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Shift+Tab: Jump between the comment and reply composers. Plain
        // Tab stays with the focused composer (it commits a suggestion).
        if key.code == KeyCode::BackTab {
            self.switch_focus();
            return true;
        }

        false
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
