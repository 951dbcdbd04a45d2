use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::mention::render_dropdown;

use super::state::{App, Focus};

const COMPOSER_HEIGHT: u16 = 6;

impl App {
    /// Render the UI and record where everything landed for mouse
    /// hit-testing. Dropdowns draw last so they overlay the composers.
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(COMPOSER_HEIGHT), // Comment composer
            Constraint::Length(COMPOSER_HEIGHT), // Reply composer
            Constraint::Min(1),                  // Status line
        ])
        .split(frame.area());

        let comment_area = layout[0];
        let reply_area = layout[1];
        let status_area = layout[2];

        self.render_composer(frame, Focus::CommentBox, comment_area);
        self.render_composer(frame, Focus::ReplyBox, reply_area);
        self.render_status_line(frame, status_area);

        self.comment_dropdown_area = render_dropdown(
            frame,
            self.comment.mention.dropdown(),
            comment_area,
            self.max_visible,
        );
        self.reply_dropdown_area = render_dropdown(
            frame,
            self.reply.mention.dropdown(),
            reply_area,
            self.max_visible,
        );

        self.regions.comment_input = comment_area;
        self.regions.reply_input = reply_area;
        self.regions.comment_dropdown = self.comment_dropdown_area.map(|d| d.area);
        self.regions.reply_dropdown = self.reply_dropdown_area.map(|d| d.area);
    }

    fn render_composer(&mut self, frame: &mut Frame, which: Focus, area: Rect) {
        let border_color = if self.focus == which {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let title = match which {
            Focus::CommentBox => " Comment ",
            Focus::ReplyBox => " Reply ",
        };

        let composer = match which {
            Focus::CommentBox => &mut self.comment,
            Focus::ReplyBox => &mut self.reply,
        };
        composer.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&composer.textarea, area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let composer = match self.focus {
            Focus::CommentBox => &self.comment,
            Focus::ReplyBox => &self.reply,
        };
        let dirty_marker = if composer.dirty { "*" } else { "" };
        let status = format!(
            " {} chars{}  |  @ to mention, Shift+Tab to switch box, Ctrl+C to quit",
            composer.char_count, dirty_marker
        );

        let content = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(content, area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
