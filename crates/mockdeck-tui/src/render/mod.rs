//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use mockdeck_app::state::{AppState, Screen};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering - everything is derived from state, nothing is mutated.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(state.screen), areas.header);

    match state.screen {
        Screen::Dashboard => {
            frame.render_widget(widgets::Dashboard::new(&state.stats), areas.body);
        }
        Screen::Users => {
            frame.render_widget(widgets::UsersTable::new(state), areas.body);
        }
        Screen::Stubs => {
            let (list, detail) = layout::split_stub_panel(areas.body);
            frame.render_widget(widgets::StubList::new(state), list);
            frame.render_widget(widgets::StubDetail::new(state), detail);
        }
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Modals over the body
    if state.user_form.is_open() {
        frame.render_widget(widgets::UserForm::new(&state.user_form), areas.body);
    }
    if let Some(confirm) = &state.confirm_delete {
        frame.render_widget(widgets::ConfirmDialog::new(confirm), areas.body);
    }

    // Notices on top of everything
    if !state.notices.is_empty() {
        frame.render_widget(widgets::NoticeStack::new(&state.notices), areas.body);
    }
}
