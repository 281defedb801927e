//! User table, form, and delete handlers

use mockdeck_core::{validate_birthday, validate_name, NewUser, Notice, UserRecord};

use crate::state::{AppState, ConfirmDeleteState, DeleteTarget, FormMode};
use crate::view_model::{clamp_page, filter_users, paginate};

use super::{UpdateAction, UpdateResult};

/// The record under the table cursor, resolved through the current filter
/// and page window.
pub(crate) fn user_under_cursor(state: &AppState) -> Option<UserRecord> {
    let filtered = filter_users(&state.users, &state.users_view.search);
    let page = paginate(filtered.len(), state.users_view.page, state.page_size);
    filtered
        .get(page.start + state.users_view.cursor)
        .map(|user| (*user).clone())
}

/// Number of rows on the currently visible page.
fn visible_row_count(state: &AppState) -> usize {
    let filtered = filter_users(&state.users, &state.users_view.search);
    let page = paginate(filtered.len(), state.users_view.page, state.page_size);
    page.end - page.start
}

pub(crate) fn handle_reload(state: &mut AppState) -> UpdateResult {
    state.users_view.loading = true;
    UpdateResult::action(UpdateAction::FetchUsers)
}

pub(crate) fn handle_loaded(state: &mut AppState, users: Vec<UserRecord>) -> UpdateResult {
    state.users = users;
    state.users_view.loading = false;

    let filtered_len = filter_users(&state.users, &state.users_view.search).len();
    state.users_view.page = clamp_page(state.users_view.page, filtered_len, state.page_size);
    let rows = visible_row_count(state);
    state.users_view.cursor = state.users_view.cursor.min(rows.saturating_sub(1));
    UpdateResult::none()
}

pub(crate) fn handle_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    tracing::warn!("User fetch failed: {}", error);
    state.users_view.loading = false;
    state.push_notice(Notice::error("Failed to fetch user data"));
    UpdateResult::none()
}

pub(crate) fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    state.users_view.search = text;
    // A changed query invalidates the page position
    state.users_view.page = 1;
    state.users_view.cursor = 0;
    UpdateResult::none()
}

pub(crate) fn handle_page_next(state: &mut AppState) -> UpdateResult {
    let filtered_len = filter_users(&state.users, &state.users_view.search).len();
    let next = state.users_view.page + 1;
    state.users_view.page = clamp_page(next, filtered_len, state.page_size);
    state.users_view.cursor = 0;
    UpdateResult::none()
}

pub(crate) fn handle_page_prev(state: &mut AppState) -> UpdateResult {
    state.users_view.page = state.users_view.page.saturating_sub(1).max(1);
    state.users_view.cursor = 0;
    UpdateResult::none()
}

pub(crate) fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    state.users_view.cursor = state.users_view.cursor.saturating_sub(1);
    UpdateResult::none()
}

pub(crate) fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    let rows = visible_row_count(state);
    if state.users_view.cursor + 1 < rows {
        state.users_view.cursor += 1;
    }
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Form
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_open_create(state: &mut AppState) -> UpdateResult {
    state.user_form.open_create();
    UpdateResult::none()
}

pub(crate) fn handle_open_edit(state: &mut AppState) -> UpdateResult {
    if let Some(user) = user_under_cursor(state) {
        state.user_form.open_edit(&user);
    }
    UpdateResult::none()
}

pub(crate) fn handle_form_input(state: &mut AppState, c: char) -> UpdateResult {
    if state.user_form.submitting {
        return UpdateResult::none();
    }
    state.user_form.focused_text_mut().push(c);
    UpdateResult::none()
}

pub(crate) fn handle_form_backspace(state: &mut AppState) -> UpdateResult {
    if state.user_form.submitting {
        return UpdateResult::none();
    }
    state.user_form.focused_text_mut().pop();
    UpdateResult::none()
}

pub(crate) fn handle_form_next_field(state: &mut AppState) -> UpdateResult {
    state.user_form.focus = state.user_form.focus.next();
    UpdateResult::none()
}

/// Validate both fields and dispatch the create or update.
///
/// Both validators run on every submit so the user sees all field errors
/// at once; nothing is dispatched while any field is invalid or a prior
/// round trip is still in flight.
pub(crate) fn handle_form_submit(state: &mut AppState) -> UpdateResult {
    if state.user_form.submitting {
        return UpdateResult::none();
    }
    state.user_form.clear_errors();

    let name = match validate_name(&state.user_form.name) {
        Ok(name) => Some(name),
        Err(e) => {
            state.user_form.name_error = Some(e.user_message());
            None
        }
    };
    let birthday = match validate_birthday(&state.user_form.birthday) {
        Ok(birthday) => Some(birthday),
        Err(e) => {
            state.user_form.birthday_error = Some(e.user_message());
            None
        }
    };

    let (Some(name), Some(birthday)) = (name, birthday) else {
        return UpdateResult::none();
    };

    let user = NewUser::new(name, birthday);
    state.user_form.submitting = true;

    match state.user_form.mode {
        FormMode::Creating => UpdateResult::action(UpdateAction::CreateUser { user }),
        FormMode::Editing(id) => UpdateResult::action(UpdateAction::UpdateUser { id, user }),
        FormMode::Closed => {
            state.user_form.submitting = false;
            UpdateResult::none()
        }
    }
}

pub(crate) fn handle_form_cancel(state: &mut AppState) -> UpdateResult {
    state.user_form.close();
    UpdateResult::none()
}

pub(crate) fn handle_saved(state: &mut AppState, created: bool) -> UpdateResult {
    state.user_form.close();
    let text = if created {
        "User created successfully"
    } else {
        "User updated successfully"
    };
    state.push_notice(Notice::success(text));
    // Refetch only now that the mutation has settled
    state.users_view.loading = true;
    UpdateResult::action(UpdateAction::FetchUsers)
}

pub(crate) fn handle_save_failed(state: &mut AppState, error: String) -> UpdateResult {
    tracing::warn!("User save failed: {}", error);
    state.user_form.submitting = false;
    state.push_notice(Notice::error("Operation failed"));
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    if let Some(user) = user_under_cursor(state) {
        state.confirm_delete = Some(ConfirmDeleteState::new(DeleteTarget::User {
            id: user.id,
            name: user.name,
        }));
    }
    UpdateResult::none()
}

pub(crate) fn handle_deleted(state: &mut AppState) -> UpdateResult {
    state.confirm_delete = None;
    state.push_notice(Notice::success("User deleted successfully"));
    state.users_view.loading = true;
    UpdateResult::action(UpdateAction::FetchUsers)
}

pub(crate) fn handle_delete_failed(state: &mut AppState, error: String) -> UpdateResult {
    tracing::warn!("User delete failed: {}", error);
    state.confirm_delete = None;
    state.push_notice(Notice::error("Delete operation failed"));
    UpdateResult::none()
}
