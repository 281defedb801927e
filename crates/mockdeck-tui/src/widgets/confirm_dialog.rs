//! Confirmation dialog for destructive deletes

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use mockdeck_app::state::ConfirmDeleteState;

use crate::theme::{palette, styles};

pub struct ConfirmDialog<'a> {
    state: &'a ConfirmDeleteState,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(state: &'a ConfirmDeleteState) -> Self {
        Self { state }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = Self::centered_rect(56, 7, area);
        Clear.render(modal_area, buf);

        let block = styles::panel_block(true)
            .title(" Confirm Delete ")
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),
        ])
        .split(inner);

        Paragraph::new(self.state.prompt())
            .alignment(Alignment::Center)
            .style(styles::text_primary())
            .render(rows[1], buf);

        let buttons = if self.state.deleting {
            Line::from(Span::styled("Deleting...", styles::status_yellow()))
        } else {
            Line::from(vec![
                Span::styled("[", styles::text_muted()),
                Span::styled(
                    "y",
                    Style::default()
                        .fg(palette::STATUS_GREEN)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("] Yes  ", styles::text_muted()),
                Span::styled("[", styles::text_muted()),
                Span::styled(
                    "n",
                    Style::default()
                        .fg(palette::STATUS_RED)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("] No", styles::text_muted()),
            ])
        };
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(rows[3], buf);
    }
}
