//! Bottom status bar with key hints for the active screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mockdeck_app::state::{AppState, Screen};

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.state.confirm_delete.is_some() {
            return &[("y", "confirm"), ("n", "cancel")];
        }
        if self.state.user_form.is_open() {
            return &[("Enter", "save"), ("Tab", "field"), ("Esc", "cancel")];
        }
        if self.state.stub_panel.is_editing() {
            return &[("Ctrl+S", "save"), ("Esc", "cancel")];
        }
        match self.state.screen {
            Screen::Dashboard => &[("1-3", "screen"), ("q", "quit")],
            Screen::Users => &[
                ("/", "search"),
                ("n", "new"),
                ("e", "edit"),
                ("d", "delete"),
                ("←→", "page"),
                ("r", "refresh"),
                ("q", "quit"),
            ],
            Screen::Stubs => &[
                ("/", "search"),
                ("n", "new"),
                ("e", "edit"),
                ("d", "delete"),
                ("↑↓", "select"),
                ("r", "refresh"),
                ("q", "quit"),
            ],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled(format!("[{key}]"), styles::accent()));
            spans.push(Span::styled(format!(" {action}  "), styles::text_secondary()));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(100, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(StatusBar::new(state), frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_users_screen_hints() {
        let mut state = AppState::default();
        state.screen = Screen::Users;
        let content = render(&state);
        assert!(content.contains("search"));
        assert!(content.contains("delete"));
    }

    #[test]
    fn test_modal_hints_take_priority() {
        let mut state = AppState::default();
        state.screen = Screen::Users;
        state.user_form.open_create();
        let content = render(&state);
        assert!(content.contains("save"));
        assert!(!content.contains("delete"));
    }
}
