//! Key event handlers, mapping keys to messages per screen and modal

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen};

/// Convert key events to messages based on what currently owns the keyboard.
///
/// Modals take priority over the screen underneath: confirm dialog, then the
/// user form, then the stub editor, then an active search box.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.confirm_delete.is_some() {
        return handle_key_confirm_dialog(key);
    }
    if state.user_form.is_open() {
        return handle_key_user_form(key);
    }
    if state.stub_panel.is_editing() {
        return handle_key_stub_editor(key);
    }
    if state.users_view.search_active && state.screen == Screen::Users {
        return handle_key_user_search(state, key);
    }
    if state.stub_panel.search_active && state.screen == Screen::Stubs {
        return handle_key_stub_search(state, key);
    }

    match state.screen {
        Screen::Dashboard => handle_key_dashboard(key),
        Screen::Users => handle_key_users(key),
        Screen::Stubs => handle_key_stubs(key),
    }
}

/// Keys available on every screen when no modal is open
fn handle_key_global(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('1') => Some(Message::ShowScreen(Screen::Dashboard)),
        InputKey::Char('2') => Some(Message::ShowScreen(Screen::Users)),
        InputKey::Char('3') => Some(Message::ShowScreen(Screen::Stubs)),
        _ => None,
    }
}

fn handle_key_dashboard(key: InputKey) -> Option<Message> {
    handle_key_global(&key)
}

fn handle_key_users(key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(&key) {
        return Some(msg);
    }
    match key {
        InputKey::Char('/') => Some(Message::UserSearchStart),
        InputKey::Char('r') => Some(Message::ReloadUsers),
        InputKey::Char('n') => Some(Message::OpenCreateUser),
        InputKey::Char('e') | InputKey::Enter => Some(Message::OpenEditUser),
        InputKey::Char('d') | InputKey::Delete => Some(Message::RequestDelete),
        InputKey::Up | InputKey::Char('k') => Some(Message::UserCursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::UserCursorDown),
        InputKey::Right | InputKey::PageDown => Some(Message::UserPageNext),
        InputKey::Left | InputKey::PageUp => Some(Message::UserPagePrev),
        _ => None,
    }
}

fn handle_key_stubs(key: InputKey) -> Option<Message> {
    if let Some(msg) = handle_key_global(&key) {
        return Some(msg);
    }
    match key {
        InputKey::Char('/') => Some(Message::StubSearchStart),
        InputKey::Char('r') => Some(Message::ReloadStubs),
        InputKey::Char('n') => Some(Message::OpenCreateStub),
        InputKey::Char('e') | InputKey::Enter => Some(Message::OpenEditStub),
        InputKey::Char('d') | InputKey::Delete => Some(Message::RequestDelete),
        InputKey::Up | InputKey::Char('k') => Some(Message::StubSelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::StubSelectNext),
        _ => None,
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmDelete),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelDelete),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_user_form(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::UserFormCancel),
        InputKey::Enter => Some(Message::UserFormSubmit),
        InputKey::Tab | InputKey::BackTab | InputKey::Up | InputKey::Down => {
            Some(Message::UserFormNextField)
        }
        InputKey::Backspace => Some(Message::UserFormBackspace),
        InputKey::Char(c) => Some(Message::UserFormInput { c }),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_stub_editor(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::StubEditorCancel),
        InputKey::CharCtrl('s') => Some(Message::StubEditorSave),
        InputKey::Enter => Some(Message::StubEditorNewline),
        InputKey::Backspace => Some(Message::StubEditorBackspace),
        InputKey::Tab => Some(Message::StubEditorInput { c: ' ' }),
        InputKey::Char(c) => Some(Message::StubEditorInput { c }),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_user_search(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Keep the query, leave input mode
        InputKey::Esc | InputKey::Enter => Some(Message::UserSearchEnd),
        InputKey::Backspace => {
            let mut text = state.users_view.search.clone();
            text.pop();
            Some(Message::UserSearchInput { text })
        }
        InputKey::Char(c) => {
            let mut text = state.users_view.search.clone();
            text.push(c);
            Some(Message::UserSearchInput { text })
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_stub_search(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter => Some(Message::StubSearchEnd),
        InputKey::Backspace => {
            let mut text = state.stub_panel.search.clone();
            text.pop();
            Some(Message::StubSearchInput { text })
        }
        InputKey::Char(c) => {
            let mut text = state.stub_panel.search.clone();
            text.push(c);
            Some(Message::StubSearchInput { text })
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
