//! Stub list, detail editor, and delete handlers

use mockdeck_core::{Notice, StubMapping};

use crate::state::{AppState, ConfirmDeleteState, DeleteTarget, EditorMode};
use crate::view_model::{filter_stubs, retain_selection};

use super::{UpdateAction, UpdateResult};

/// The currently selected stub, if any.
pub(crate) fn selected_stub(state: &AppState) -> Option<&StubMapping> {
    let id = state.stub_panel.selected_id.as_deref()?;
    state.stubs.iter().find(|stub| stub.id() == Some(id))
}

pub(crate) fn handle_reload(state: &mut AppState) -> UpdateResult {
    state.stub_panel.loading = true;
    UpdateResult::action(UpdateAction::FetchStubs)
}

pub(crate) fn handle_loaded(state: &mut AppState, stubs: Vec<StubMapping>) -> UpdateResult {
    state.stubs = stubs;
    state.stub_panel.loading = false;

    let had_selection = state.stub_panel.selected_id.is_some();
    let retained = retain_selection(
        state.stub_panel.selected_id.as_deref(),
        state.stub_panel.selection_touched,
        &state.stubs,
    );
    if had_selection && retained.is_none() {
        // The selected stub vanished; remember that so nothing auto-selects
        // a neighbour on the next load
        state.stub_panel.selection_touched = true;
    }
    state.stub_panel.selected_id = retained;
    UpdateResult::none()
}

pub(crate) fn handle_load_failed(state: &mut AppState, error: String) -> UpdateResult {
    tracing::warn!("Stub fetch failed: {}", error);
    state.stub_panel.loading = false;
    state.push_notice(Notice::error("Failed to fetch stub mappings"));
    UpdateResult::none()
}

pub(crate) fn handle_search_input(state: &mut AppState, text: String) -> UpdateResult {
    // Filtering is view-only; the selection survives even when the selected
    // stub is filtered out of the visible list
    state.stub_panel.search = text;
    UpdateResult::none()
}

pub(crate) fn handle_select_next(state: &mut AppState) -> UpdateResult {
    move_selection(state, 1)
}

pub(crate) fn handle_select_prev(state: &mut AppState) -> UpdateResult {
    move_selection(state, -1)
}

fn move_selection(state: &mut AppState, delta: isize) -> UpdateResult {
    let filtered = filter_stubs(&state.stubs, &state.stub_panel.search);
    let ids: Vec<String> = filtered
        .iter()
        .filter_map(|stub| stub.id())
        .map(str::to_string)
        .collect();
    if ids.is_empty() {
        return UpdateResult::none();
    }

    let current = state
        .stub_panel
        .selected_id
        .as_deref()
        .and_then(|id| ids.iter().position(|candidate| candidate == id));

    let next = match current {
        Some(index) => {
            let len = ids.len() as isize;
            ((index as isize + delta).rem_euclid(len)) as usize
        }
        None => {
            if delta >= 0 {
                0
            } else {
                ids.len() - 1
            }
        }
    };

    state.stub_panel.selected_id = Some(ids[next].clone());
    state.stub_panel.selection_touched = true;
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_open_edit(state: &mut AppState) -> UpdateResult {
    let seed = selected_stub(state)
        .and_then(|stub| stub.id().map(|id| (id.to_string(), stub.pretty())));
    let Some((id, pretty)) = seed else {
        return UpdateResult::none();
    };
    state.stub_panel.buffer = pretty;
    state.stub_panel.editor = EditorMode::Editing(id);
    state.stub_panel.json_error = None;
    UpdateResult::none()
}

pub(crate) fn handle_open_create(state: &mut AppState) -> UpdateResult {
    state.stub_panel.buffer = StubMapping::template().pretty();
    state.stub_panel.editor = EditorMode::Creating;
    state.stub_panel.json_error = None;
    UpdateResult::none()
}

pub(crate) fn handle_editor_input(state: &mut AppState, c: char) -> UpdateResult {
    if !state.stub_panel.saving {
        state.stub_panel.buffer.push(c);
    }
    UpdateResult::none()
}

pub(crate) fn handle_editor_backspace(state: &mut AppState) -> UpdateResult {
    if !state.stub_panel.saving {
        state.stub_panel.buffer.pop();
    }
    UpdateResult::none()
}

pub(crate) fn handle_editor_newline(state: &mut AppState) -> UpdateResult {
    if !state.stub_panel.saving {
        state.stub_panel.buffer.push('\n');
    }
    UpdateResult::none()
}

/// Parse the buffer and dispatch the create or update.
///
/// On a parse failure the buffer is kept verbatim so the user can fix the
/// malformed JSON in place; only `json_error` changes.
pub(crate) fn handle_editor_save(state: &mut AppState) -> UpdateResult {
    if state.stub_panel.saving {
        return UpdateResult::none();
    }

    let doc: serde_json::Value = match serde_json::from_str(&state.stub_panel.buffer) {
        Ok(doc) => doc,
        Err(e) => {
            state.stub_panel.json_error = Some(format!("Invalid JSON: {e}"));
            return UpdateResult::none();
        }
    };
    state.stub_panel.json_error = None;

    match state.stub_panel.editor.clone() {
        EditorMode::Editing(id) => {
            state.stub_panel.saving = true;
            UpdateResult::action(UpdateAction::UpdateStub { id, doc })
        }
        EditorMode::Creating => {
            state.stub_panel.saving = true;
            UpdateResult::action(UpdateAction::CreateStub { doc })
        }
        EditorMode::Viewing => UpdateResult::none(),
    }
}

pub(crate) fn handle_editor_cancel(state: &mut AppState) -> UpdateResult {
    state.stub_panel.close_editor();
    UpdateResult::none()
}

pub(crate) fn handle_saved(state: &mut AppState, created: bool) -> UpdateResult {
    state.stub_panel.saving = false;
    state.stub_panel.close_editor();
    let text = if created {
        "Stub mapping created successfully"
    } else {
        "Stub mapping updated successfully"
    };
    state.push_notice(Notice::success(text));
    state.stub_panel.loading = true;
    UpdateResult::action(UpdateAction::FetchStubs)
}

pub(crate) fn handle_save_failed(state: &mut AppState, error: String) -> UpdateResult {
    tracing::warn!("Stub save failed: {}", error);
    state.stub_panel.saving = false;
    state.push_notice(Notice::error("Operation failed"));
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────────────────────────
// Delete
// ─────────────────────────────────────────────────────────────────────────────

pub(crate) fn handle_request_delete(state: &mut AppState) -> UpdateResult {
    if let Some(id) = selected_stub(state).and_then(|stub| stub.id().map(str::to_string)) {
        state.confirm_delete = Some(ConfirmDeleteState::new(DeleteTarget::Stub { id }));
    }
    UpdateResult::none()
}

pub(crate) fn handle_deleted(state: &mut AppState) -> UpdateResult {
    state.confirm_delete = None;
    state.push_notice(Notice::success("Stub mapping deleted successfully"));
    state.stub_panel.loading = true;
    UpdateResult::action(UpdateAction::FetchStubs)
}

pub(crate) fn handle_delete_failed(state: &mut AppState, error: String) -> UpdateResult {
    tracing::warn!("Stub delete failed: {}", error);
    state.confirm_delete = None;
    state.push_notice(Notice::error("Delete operation failed"));
    UpdateResult::none()
}
