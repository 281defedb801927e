//! Main update function - handles state transitions (TEA pattern)

use chrono::Utc;

use crate::message::Message;
use crate::state::{AppState, DeleteTarget, Screen};

use super::{keys::handle_key, stubs, users, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quitting = true;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.prune_notices(Utc::now());
            UpdateResult::none()
        }

        Message::ShowScreen(screen) => {
            // Leave any modal behind when switching screens
            state.user_form.close();
            state.stub_panel.close_editor();
            state.confirm_delete = None;
            state.screen = screen;
            match screen {
                // Collections are refetched on entry so the tables never
                // show stale data
                Screen::Users => users::handle_reload(state),
                Screen::Stubs => stubs::handle_reload(state),
                Screen::Dashboard => UpdateResult::none(),
            }
        }

        Message::Notice(notice) => {
            state.push_notice(notice);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // User Collection
        // ─────────────────────────────────────────────────────────
        Message::ReloadUsers => users::handle_reload(state),
        Message::UsersLoaded { users } => users::handle_loaded(state, users),
        Message::UsersLoadFailed { error } => users::handle_load_failed(state, error),

        Message::UserSearchInput { text } => users::handle_search_input(state, text),
        Message::UserSearchStart => {
            state.users_view.search_active = true;
            UpdateResult::none()
        }
        Message::UserSearchEnd => {
            state.users_view.search_active = false;
            UpdateResult::none()
        }

        Message::UserPageNext => users::handle_page_next(state),
        Message::UserPagePrev => users::handle_page_prev(state),
        Message::UserCursorUp => users::handle_cursor_up(state),
        Message::UserCursorDown => users::handle_cursor_down(state),

        // ─────────────────────────────────────────────────────────
        // User Form
        // ─────────────────────────────────────────────────────────
        Message::OpenCreateUser => users::handle_open_create(state),
        Message::OpenEditUser => users::handle_open_edit(state),
        Message::UserFormInput { c } => users::handle_form_input(state, c),
        Message::UserFormBackspace => users::handle_form_backspace(state),
        Message::UserFormNextField => users::handle_form_next_field(state),
        Message::UserFormSubmit => users::handle_form_submit(state),
        Message::UserFormCancel => users::handle_form_cancel(state),
        Message::UserSaved { created } => users::handle_saved(state, created),
        Message::UserSaveFailed { error } => users::handle_save_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Delete Confirmation
        // ─────────────────────────────────────────────────────────
        Message::RequestDelete => match state.screen {
            Screen::Users => users::handle_request_delete(state),
            Screen::Stubs => stubs::handle_request_delete(state),
            Screen::Dashboard => UpdateResult::none(),
        },
        Message::ConfirmDelete => handle_confirm_delete(state),
        Message::CancelDelete => {
            state.confirm_delete = None;
            UpdateResult::none()
        }
        Message::UserDeleted => users::handle_deleted(state),
        Message::UserDeleteFailed { error } => users::handle_delete_failed(state, error),

        // ─────────────────────────────────────────────────────────
        // Stub Collection
        // ─────────────────────────────────────────────────────────
        Message::ReloadStubs => stubs::handle_reload(state),
        Message::StubsLoaded { stubs } => stubs::handle_loaded(state, stubs),
        Message::StubsLoadFailed { error } => stubs::handle_load_failed(state, error),

        Message::StubSearchInput { text } => stubs::handle_search_input(state, text),
        Message::StubSearchStart => {
            state.stub_panel.search_active = true;
            UpdateResult::none()
        }
        Message::StubSearchEnd => {
            state.stub_panel.search_active = false;
            UpdateResult::none()
        }

        Message::StubSelectNext => stubs::handle_select_next(state),
        Message::StubSelectPrev => stubs::handle_select_prev(state),

        // ─────────────────────────────────────────────────────────
        // Stub Editor
        // ─────────────────────────────────────────────────────────
        Message::OpenEditStub => stubs::handle_open_edit(state),
        Message::OpenCreateStub => stubs::handle_open_create(state),
        Message::StubEditorInput { c } => stubs::handle_editor_input(state, c),
        Message::StubEditorBackspace => stubs::handle_editor_backspace(state),
        Message::StubEditorNewline => stubs::handle_editor_newline(state),
        Message::StubEditorSave => stubs::handle_editor_save(state),
        Message::StubEditorCancel => stubs::handle_editor_cancel(state),
        Message::StubSaved { created } => stubs::handle_saved(state, created),
        Message::StubSaveFailed { error } => stubs::handle_save_failed(state, error),
        Message::StubDeleted => stubs::handle_deleted(state),
        Message::StubDeleteFailed { error } => stubs::handle_delete_failed(state, error),
    }
}

/// Dispatch the delete for whatever the open confirmation refers to.
fn handle_confirm_delete(state: &mut AppState) -> UpdateResult {
    let Some(confirm) = state.confirm_delete.as_mut() else {
        return UpdateResult::none();
    };
    if confirm.deleting {
        return UpdateResult::none();
    }
    confirm.deleting = true;

    match confirm.target.clone() {
        DeleteTarget::User { id, .. } => UpdateResult::action(UpdateAction::DeleteUser { id }),
        DeleteTarget::Stub { id } => UpdateResult::action(UpdateAction::DeleteStub { id }),
    }
}
