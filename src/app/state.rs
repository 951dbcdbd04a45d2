use std::cell::Cell;
use std::rc::Rc;

use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::mention::{DropdownArea, KeyOutcome, MentionConfig, MentionController, insertion};

/// Which composer has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    CommentBox,
    ReplyBox,
}

/// One mention-enabled text composer: a textarea plus its own controller.
///
/// Each composer owns an independent controller, so the comment box and a
/// reply box can search and show dropdowns concurrently without touching
/// each other.
pub struct ComposerState {
    pub textarea: TextArea<'static>,
    pub mention: MentionController,
    /// Bumped by the controller's content-changed hook after an insertion
    content_changed: Rc<Cell<u64>>,
    last_seen_change: u64,
    pub char_count: usize,
    pub dirty: bool,
}

impl ComposerState {
    pub fn new(title: &'static str, config: &Config) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        textarea.set_cursor_line_style(Style::default());

        let mention_config = MentionConfig {
            debounce_ms: config.search.debounce_ms,
            min_term_len: config.search.min_term_len,
        };
        let mut mention =
            MentionController::new(config.search.url.as_deref().unwrap_or(""), mention_config);

        let content_changed = Rc::new(Cell::new(0u64));
        let hook = Rc::clone(&content_changed);
        mention.set_on_content_changed(Box::new(move || hook.set(hook.get() + 1)));

        Self {
            textarea,
            mention,
            content_changed,
            last_seen_change: 0,
            char_count: 0,
            dirty: false,
        }
    }

    /// Re-run trigger detection against the line under the cursor. Call
    /// after every edit that may have changed text or cursor position.
    pub fn after_edit(&mut self) {
        let (row, col) = self.textarea.cursor();
        let line = self.textarea.lines()[row].clone();
        let cursor = insertion::byte_offset_of_col(&line, col);
        self.mention.handle_edit(&line, cursor);
        self.refresh_stats();
    }

    /// Commit `username` into the textarea, replacing the active token.
    pub fn insert_selected(&mut self, username: &str) {
        if insertion::insert_mention(&mut self.textarea, username) {
            self.mention.after_insert();
        } else {
            // The token under the cursor disappeared; nothing to replace.
            self.mention.hide();
        }
    }

    /// Per-iteration upkeep: fire due searches, apply worker responses,
    /// and pick up insertions signalled through the content-changed hook.
    pub fn tick(&mut self) {
        self.mention.tick();
        if self.content_changed.get() != self.last_seen_change {
            self.last_seen_change = self.content_changed.get();
            self.dirty = true;
            self.refresh_stats();
        }
    }

    /// Offer a key to the mention dropdown; returns true when consumed.
    pub fn handle_mention_key(
        &mut self,
        key: ratatui::crossterm::event::KeyEvent,
    ) -> bool {
        match self.mention.handle_key(key) {
            KeyOutcome::Ignored => false,
            KeyOutcome::Consumed => true,
            KeyOutcome::Insert(username) => {
                self.insert_selected(&username);
                true
            }
        }
    }

    fn refresh_stats(&mut self) {
        self.char_count = self
            .textarea
            .lines()
            .iter()
            .map(|line| line.chars().count())
            .sum();
    }
}

/// Application state
pub struct App {
    pub comment: ComposerState,
    pub reply: ComposerState,
    pub focus: Focus,
    pub regions: LayoutRegions,
    /// Dropdown placement from the last render, for mouse hit-testing
    pub comment_dropdown_area: Option<DropdownArea>,
    pub reply_dropdown_area: Option<DropdownArea>,
    pub max_visible: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            comment: ComposerState::new(" Comment ", config),
            reply: ComposerState::new(" Reply ", config),
            focus: Focus::CommentBox,
            regions: LayoutRegions::default(),
            comment_dropdown_area: None,
            reply_dropdown_area: None,
            max_visible: config.dropdown.max_visible,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focused_composer(&mut self) -> &mut ComposerState {
        match self.focus {
            Focus::CommentBox => &mut self.comment,
            Focus::ReplyBox => &mut self.reply,
        }
    }

    /// Move focus to the other composer, dismissing both dropdowns so a
    /// stale suggestion list never follows the focus.
    pub fn switch_focus(&mut self) {
        self.comment.mention.hide();
        self.reply.mention.hide();
        self.focus = match self.focus {
            Focus::CommentBox => Focus::ReplyBox,
            Focus::ReplyBox => Focus::CommentBox,
        };
    }

    pub fn tick(&mut self) {
        self.comment.tick();
        self.reply.tick();
    }

    /// Tear down both controllers so their worker threads exit.
    pub fn destroy(&mut self) {
        self.comment.mention.destroy();
        self.reply.mention.destroy();
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
pub(crate) mod state_tests;
