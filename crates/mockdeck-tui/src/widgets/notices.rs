//! Transient notice stack
//!
//! Renders the most recent notices in the top-right corner of the body.
//! Expiry is handled by the Tick sweep in the app layer; this widget only
//! draws whatever is still queued.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use unicode_width::UnicodeWidthStr;

use mockdeck_app::state::TimedNotice;

use crate::theme::styles;

const MAX_VISIBLE: usize = 4;

pub struct NoticeStack<'a> {
    notices: &'a [TimedNotice],
}

impl<'a> NoticeStack<'a> {
    pub fn new(notices: &'a [TimedNotice]) -> Self {
        Self { notices }
    }
}

impl Widget for NoticeStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self.notices.iter().rev().take(MAX_VISIBLE);

        for (row, timed) in visible.enumerate() {
            let text = format!(" {} ", timed.notice.text);
            let width = (text.width() as u16).min(area.width);
            let line_area = Rect::new(
                area.x + area.width.saturating_sub(width),
                area.y + row as u16,
                width,
                1,
            );
            if line_area.y >= area.y + area.height {
                break;
            }
            Clear.render(line_area, buf);
            Paragraph::new(Line::from(Span::styled(
                text,
                styles::notice(timed.notice.level),
            )))
            .render(line_area, buf);
        }
    }
}
