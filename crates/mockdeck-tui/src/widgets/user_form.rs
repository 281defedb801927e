//! Create/edit user modal form

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use mockdeck_app::state::{FormField, FormMode, UserFormState};
use mockdeck_core::BIRTHDAY_FORMAT;

use crate::theme::{palette, styles};

pub struct UserForm<'a> {
    form: &'a UserFormState,
}

impl<'a> UserForm<'a> {
    pub fn new(form: &'a UserFormState) -> Self {
        Self { form }
    }

    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }

    fn render_field(
        &self,
        label: &str,
        value: &str,
        field: FormField,
        error: Option<&str>,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let focused = self.form.focus == field;
        let block = styles::panel_block(focused).title(format!(" {label} "));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(value.to_string(), styles::text_primary())];
        if focused && !self.form.submitting {
            spans.push(Span::styled("█", styles::accent()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        if let Some(error) = error {
            let error_area = Rect::new(
                area.x + 1,
                area.y + area.height.saturating_sub(1),
                area.width.saturating_sub(2),
                1,
            );
            Paragraph::new(Span::styled(format!(" {error} "), styles::status_red()))
                .render(error_area, buf);
        }
    }
}

impl Widget for UserForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.form.mode {
            FormMode::Creating => " New User ",
            FormMode::Editing(_) => " Edit User ",
            FormMode::Closed => return,
        };

        let modal_area = Self::centered_rect(56, 13, area);
        Clear.render(modal_area, buf);

        let block = styles::panel_block(true)
            .title(title)
            .style(Style::default().bg(palette::POPUP_BG));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let rows = Layout::vertical([
            Constraint::Length(4), // Name field + inline error
            Constraint::Length(4), // Birthday field + inline error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints / submitting indicator
            Constraint::Min(0),
        ])
        .split(inner);

        self.render_field(
            "Name",
            &self.form.name,
            FormField::Name,
            self.form.name_error.as_deref(),
            rows[0],
            buf,
        );
        self.render_field(
            &format!("Birthday ({BIRTHDAY_FORMAT})"),
            &self.form.birthday,
            FormField::Birthday,
            self.form.birthday_error.as_deref(),
            rows[1],
            buf,
        );

        let hints = if self.form.submitting {
            Line::from(Span::styled("Saving...", styles::status_yellow()))
        } else {
            Line::from(vec![
                Span::styled("[Enter]", styles::accent()),
                Span::styled(" Save  ", styles::text_secondary()),
                Span::styled("[Tab]", styles::accent()),
                Span::styled(" Next field  ", styles::text_secondary()),
                Span::styled("[Esc]", styles::accent()),
                Span::styled(" Cancel", styles::text_secondary()),
            ])
        };
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .render(rows[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(form: &UserFormState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(UserForm::new(form), frame.area()))
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
    fn test_create_mode_title_and_fields() {
        let mut form = UserFormState::default();
        form.open_create();
        form.name = "Alice".to_string();

        let content = render(&form);
        assert!(content.contains("New User"));
        assert!(content.contains("Alice"));
        assert!(content.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_field_error_is_shown() {
        let mut form = UserFormState::default();
        form.open_create();
        form.birthday_error = Some("must match YYYY-MM-DD".to_string());

        let content = render(&form);
        assert!(content.contains("must match"));
    }

    #[test]
    fn test_submitting_indicator_replaces_hints() {
        let mut form = UserFormState::default();
        form.open_create();
        form.submitting = true;

        let content = render(&form);
        assert!(content.contains("Saving..."));
        assert!(!content.contains("[Enter] Save"));
    }
}
