//! Message types for the application (TEA pattern)

use mockdeck_core::{Notice, StubMapping, UserRecord};

use crate::input_key::InputKey;
use crate::state::Screen;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (notice expiry)
    Tick,

    /// Quit the application
    Quit,

    /// Switch to a screen (dashboard, users, stubs)
    ShowScreen(Screen),

    /// A notice emitted by the HTTP boundary or a handler
    Notice(Notice),

    // ─────────────────────────────────────────────────────────
    // User Collection Messages
    // ─────────────────────────────────────────────────────────
    /// Request a full reload of the user collection
    ReloadUsers,
    /// User collection fetched successfully
    UsersLoaded { users: Vec<UserRecord> },
    /// User collection fetch failed
    UsersLoadFailed { error: String },

    /// Search box text changed (resets page to 1)
    UserSearchInput { text: String },
    /// Enter search-input mode
    UserSearchStart,
    /// Leave search-input mode, keeping the query
    UserSearchEnd,

    /// Next page of the filtered user table
    UserPageNext,
    /// Previous page of the filtered user table
    UserPagePrev,
    /// Move the table cursor up one row
    UserCursorUp,
    /// Move the table cursor down one row
    UserCursorDown,

    // ─────────────────────────────────────────────────────────
    // User Form Messages
    // ─────────────────────────────────────────────────────────
    /// Open the form empty, in create mode
    OpenCreateUser,
    /// Open the form seeded from the record under the cursor
    OpenEditUser,
    /// Character typed into the focused form field
    UserFormInput { c: char },
    /// Backspace in the focused form field
    UserFormBackspace,
    /// Move focus to the next form field
    UserFormNextField,
    /// Validate and dispatch create or update
    UserFormSubmit,
    /// Discard in-progress edits and close
    UserFormCancel,
    /// Mutation acknowledged by the server
    UserSaved { created: bool },
    /// Mutation rejected
    UserSaveFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Delete Confirmation Messages
    // ─────────────────────────────────────────────────────────
    /// Ask for confirmation before deleting the entity under the cursor
    RequestDelete,
    /// Confirmed - dispatch the delete
    ConfirmDelete,
    /// Dismissed - keep everything as it was
    CancelDelete,
    /// User deletion acknowledged
    UserDeleted,
    /// User deletion rejected
    UserDeleteFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Stub Collection Messages
    // ─────────────────────────────────────────────────────────
    /// Request a full reload of the stub mappings
    ReloadStubs,
    /// Stub collection fetched successfully
    StubsLoaded { stubs: Vec<StubMapping> },
    /// Stub collection fetch failed
    StubsLoadFailed { error: String },

    /// Stub search box text changed
    StubSearchInput { text: String },
    /// Enter stub search-input mode
    StubSearchStart,
    /// Leave stub search-input mode
    StubSearchEnd,

    /// Select the next stub in the filtered list
    StubSelectNext,
    /// Select the previous stub in the filtered list
    StubSelectPrev,

    // ─────────────────────────────────────────────────────────
    // Stub Editor Messages
    // ─────────────────────────────────────────────────────────
    /// Switch the detail panel to a raw-text editor seeded with the
    /// selected stub's pretty-printed document
    OpenEditStub,
    /// Open the editor seeded with the default stub template
    OpenCreateStub,
    /// Character typed into the editor buffer
    StubEditorInput { c: char },
    /// Backspace in the editor buffer
    StubEditorBackspace,
    /// Newline in the editor buffer
    StubEditorNewline,
    /// Parse the buffer and dispatch create or update
    StubEditorSave,
    /// Discard the buffer and return to view mode
    StubEditorCancel,
    /// Stub mutation acknowledged
    StubSaved { created: bool },
    /// Stub mutation rejected
    StubSaveFailed { error: String },
    /// Stub deletion acknowledged
    StubDeleted,
    /// Stub deletion rejected
    StubDeleteFailed { error: String },
}
