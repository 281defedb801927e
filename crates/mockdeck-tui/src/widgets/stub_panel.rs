//! Stub mapping list and detail panel
//!
//! The left panel lists mappings (method, URL, status); the right panel
//! shows the selected mapping's pretty-printed document or, in edit mode,
//! the raw JSON buffer.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Widget, Wrap},
};

use mockdeck_app::state::{AppState, EditorMode};
use mockdeck_app::view_model::filter_stubs;
use mockdeck_core::StubMapping;

use crate::theme::{palette, styles};

/// Left panel: filtered mapping list with search box
pub struct StubList<'a> {
    state: &'a AppState,
}

impl<'a> StubList<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let panel = &self.state.stub_panel;
        let block = styles::panel_block(panel.search_active).title(" Search (URL or method) ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(panel.search.clone(), styles::text_primary())];
        if panel.search_active {
            spans.push(Span::styled("█", styles::accent()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }

    fn item_line(stub: &StubMapping, selected: bool) -> ListItem<'static> {
        let method = stub.method().to_string();
        let url = stub.url().unwrap_or("(no url)").to_string();
        let status = stub
            .response_status()
            .map(|status| status.to_string())
            .unwrap_or_else(|| "-".to_string());

        let line = Line::from(vec![
            Span::styled(format!("{method:7}"), styles::accent()),
            Span::styled(url, styles::text_primary()),
            Span::styled(format!("  → {status}"), styles::text_secondary()),
        ]);
        if selected {
            ListItem::new(line).style(
                Style::default()
                    .fg(palette::ROW_SELECTED_FG)
                    .bg(palette::ROW_SELECTED_BG),
            )
        } else {
            ListItem::new(line)
        }
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let panel = &self.state.stub_panel;
        let filtered = filter_stubs(&self.state.stubs, &panel.search);

        let title = if panel.loading {
            " Mappings (loading...) ".to_string()
        } else {
            format!(" Mappings ({}) ", filtered.len())
        };
        let block = styles::panel_block(!panel.search_active).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if filtered.is_empty() {
            let message = if panel.search.is_empty() {
                "No stub mappings"
            } else {
                "No mappings match the search"
            };
            Paragraph::new(Span::styled(message, styles::text_muted())).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = filtered
            .iter()
            .map(|stub| {
                let selected = stub.id().is_some() && stub.id() == panel.selected_id.as_deref();
                Self::item_line(stub, selected)
            })
            .collect();
        Widget::render(List::new(items), inner, buf);
    }
}

impl Widget for StubList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);
        self.render_search(rows[0], buf);
        self.render_list(rows[1], buf);
    }
}

/// Right panel: selected mapping document, read-only or in the raw editor
pub struct StubDetail<'a> {
    state: &'a AppState,
}

impl<'a> StubDetail<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn selected(&self) -> Option<&StubMapping> {
        let id = self.state.stub_panel.selected_id.as_deref()?;
        self.state.stubs.iter().find(|stub| stub.id() == Some(id))
    }

    fn render_viewer(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).title(" Detail ");
        let inner = block.inner(area);
        block.render(area, buf);

        match self.selected() {
            Some(stub) => {
                Paragraph::new(stub.pretty())
                    .style(styles::text_primary())
                    .wrap(Wrap { trim: false })
                    .render(inner, buf);
            }
            None => {
                Paragraph::new(Span::styled(
                    "Select a mapping, or press 'n' to create one",
                    styles::text_muted(),
                ))
                .render(inner, buf);
            }
        }
    }

    fn render_editor(&self, area: Rect, buf: &mut Buffer) {
        let panel = &self.state.stub_panel;
        let title = match panel.editor {
            EditorMode::Creating => " New Mapping (Ctrl+S save, Esc cancel) ",
            _ => " Edit Mapping (Ctrl+S save, Esc cancel) ",
        };
        let block = styles::panel_block(true).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(inner);

        Paragraph::new(panel.buffer.clone())
            .style(styles::text_primary())
            .wrap(Wrap { trim: false })
            .render(rows[0], buf);

        if panel.saving {
            Paragraph::new(Span::styled("Saving...", styles::status_yellow()))
                .render(rows[1], buf);
        } else if let Some(error) = &panel.json_error {
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default()
                    .fg(palette::STATUS_RED)
                    .add_modifier(Modifier::BOLD),
            ))
            .render(rows[1], buf);
        }
    }
}

impl Widget for StubDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.stub_panel.is_editing() {
            self.render_editor(area, buf);
        } else {
            self.render_viewer(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stub(id: &str, method: &str, url: &str, status: u64) -> StubMapping {
        StubMapping::new(json!({
            "id": id,
            "request": { "method": method, "urlPath": url },
            "response": { "status": status }
        }))
    }

    fn render_list(state: &AppState) -> String {
        use ratatui::{backend::TestBackend, Terminal};
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(StubList::new(state), frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn render_detail(state: &AppState) -> String {
        use ratatui::{backend::TestBackend, Terminal};
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| frame.render_widget(StubDetail::new(state), frame.area()))
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
    fn test_list_shows_method_url_status() {
        let mut state = AppState::default();
        state.stubs = vec![stub("a", "GET", "/api/users", 200)];

        let content = render_list(&state);
        assert!(content.contains("GET"));
        assert!(content.contains("/api/users"));
        assert!(content.contains("200"));
    }

    #[test]
    fn test_detail_shows_selected_document() {
        let mut state = AppState::default();
        state.stubs = vec![stub("a", "GET", "/api/users", 200)];
        state.stub_panel.selected_id = Some("a".to_string());

        let content = render_detail(&state);
        assert!(content.contains("urlPath"));
    }

    #[test]
    fn test_detail_placeholder_without_selection() {
        let state = AppState::default();
        let content = render_detail(&state);
        assert!(content.contains("Select a mapping"));
    }

    #[test]
    fn test_editor_shows_buffer_and_json_error() {
        let mut state = AppState::default();
        state.stub_panel.editor = EditorMode::Creating;
        state.stub_panel.buffer = "{ broken".to_string();
        state.stub_panel.json_error = Some("Invalid JSON: expected value".to_string());

        let content = render_detail(&state);
        assert!(content.contains("{ broken"));
        assert!(content.contains("Invalid JSON"));
    }
}
