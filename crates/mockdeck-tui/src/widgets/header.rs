//! Header bar with app title and screen tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mockdeck_app::state::Screen;

use crate::theme::{palette, styles};

const SCREENS: [Screen; 3] = [Screen::Dashboard, Screen::Users, Screen::Stubs];

/// Main header showing the app title and one tab per screen
pub struct MainHeader {
    active: Screen,
}

impl MainHeader {
    pub fn new(active: Screen) -> Self {
        Self { active }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(" mockdeck ", styles::accent_bold()),
            Span::styled("│ ", styles::text_muted()),
        ];

        for (index, screen) in SCREENS.iter().enumerate() {
            let hotkey = index + 1;
            let label = format!(" [{hotkey}] {} ", screen.label());
            let style = if *screen == self.active {
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(label, style));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(active: Screen) -> String {
        let backend = TestBackend::new(60, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(MainHeader::new(active), frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_header_lists_all_screens() {
        let content = render_to_string(Screen::Dashboard);
        assert!(content.contains("mockdeck"));
        assert!(content.contains("Dashboard"));
        assert!(content.contains("Users"));
        assert!(content.contains("Stubs"));
    }
}
