//! User records table with search box and pagination footer

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, Widget},
};

use mockdeck_app::state::AppState;
use mockdeck_app::view_model::{filter_users, paginate};

use crate::theme::{palette, styles};

pub struct UsersTable<'a> {
    state: &'a AppState,
}

impl<'a> UsersTable<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let view = &self.state.users_view;
        let block = styles::panel_block(view.search_active).title(" Search (name or id) ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(view.search.clone(), styles::text_primary())];
        if view.search_active {
            spans.push(Span::styled("█", styles::accent()));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let view = &self.state.users_view;
        let filtered = filter_users(&self.state.users, &view.search);
        let page = paginate(filtered.len(), view.page, self.state.page_size);

        let title = if view.loading {
            " Users (loading...) "
        } else {
            " Users "
        };
        let block = styles::panel_block(!view.search_active).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let header = Row::new(vec![
            Cell::from("ID"),
            Cell::from("Name"),
            Cell::from("Birthday"),
            Cell::from("Created"),
        ])
        .style(
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        );

        let selected = Style::default()
            .fg(palette::ROW_SELECTED_FG)
            .bg(palette::ROW_SELECTED_BG);

        let rows: Vec<Row> = filtered[page.start..page.end]
            .iter()
            .enumerate()
            .map(|(row_index, user)| {
                let row = Row::new(vec![
                    Cell::from(user.id.to_string()),
                    Cell::from(user.name.clone()),
                    Cell::from(user.birthday.clone()),
                    Cell::from(user.createts.clone()),
                ]);
                if row_index == view.cursor {
                    row.style(selected)
                } else {
                    row.style(styles::text_primary())
                }
            })
            .collect();

        let empty = rows.is_empty();
        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Percentage(35),
                Constraint::Length(12),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .column_spacing(2);
        Widget::render(table, inner, buf);

        if empty && inner.height > 2 {
            let message = if view.search.is_empty() {
                "No users"
            } else {
                "No users match the search"
            };
            let message_area = Rect::new(inner.x, inner.y + 2, inner.width, 1);
            Paragraph::new(Span::styled(message, styles::text_muted()))
                .render(message_area, buf);
        }
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let view = &self.state.users_view;
        let filtered_len = filter_users(&self.state.users, &view.search).len();
        let page = paginate(filtered_len, view.page, self.state.page_size);

        let text = format!(
            " Page {}/{}  ({} of {} users) ",
            view.page.min(page.total_pages),
            page.total_pages,
            page.end - page.start,
            filtered_len,
        );
        Paragraph::new(Span::styled(text, styles::text_secondary())).render(area, buf);
    }
}

impl Widget for UsersTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::vertical([
            Constraint::Length(3), // Search box
            Constraint::Min(4),    // Table
            Constraint::Length(1), // Pagination footer
        ])
        .split(area);

        self.render_search(rows[0], buf);
        self.render_table(rows[1], buf);
        self.render_footer(rows[2], buf);
    }
}
