//! Statistics overview screen
//!
//! The figures here are fixed display values, not live aggregates; see
//! `DashboardStats`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use mockdeck_app::state::DashboardStats;

use crate::theme::{palette, styles};

/// Four stat cards in a row, with a welcome panel underneath
pub struct Dashboard<'a> {
    stats: &'a DashboardStats,
}

impl<'a> Dashboard<'a> {
    pub fn new(stats: &'a DashboardStats) -> Self {
        Self { stats }
    }

    fn render_card(title: &str, value: &str, value_style: Style, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Value
            Constraint::Length(1), // Title
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(Line::from(Span::styled(value.to_string(), value_style)))
            .alignment(Alignment::Center)
            .render(rows[1], buf);
        Paragraph::new(Line::from(Span::styled(
            title.to_string(),
            styles::text_secondary(),
        )))
        .alignment(Alignment::Center)
        .render(rows[2], buf);
    }
}

impl Dashboard<'_> {
    fn render_welcome(area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Welcome ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 {
            return;
        }

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Welcome to mockdeck",
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Manage user records and stub mappings from the tabs above.",
                styles::text_secondary(),
            )),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).split(area);

        let columns = Layout::horizontal([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

        let value_style = Style::default()
            .fg(palette::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD);
        let healthy_style = Style::default()
            .fg(palette::STATUS_GREEN)
            .add_modifier(Modifier::BOLD);

        Self::render_card(
            "Total Users",
            &self.stats.total_users.to_string(),
            value_style,
            columns[0],
            buf,
        );
        Self::render_card(
            "Active Stubs",
            &self.stats.active_stubs.to_string(),
            value_style,
            columns[1],
            buf,
        );
        Self::render_card(
            "System Status",
            self.stats.system_status,
            healthy_style,
            columns[2],
            buf,
        );
        Self::render_card("Uptime", self.stats.uptime, value_style, columns[3], buf);

        if rows[1].height > 0 {
            Self::render_welcome(rows[1], buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_dashboard_renders_static_figures() {
        let stats = DashboardStats::default();
        let backend = TestBackend::new(100, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(Dashboard::new(&stats), frame.area()))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("1250"));
        assert!(content.contains("48"));
        assert!(content.contains("Healthy"));
        assert!(content.contains("99.9%"));
        assert!(content.contains("Welcome to mockdeck"));
    }
}
