//! Application state (Model in TEA pattern)

use chrono::{DateTime, Duration, Utc};

use mockdeck_core::{Notice, StubMapping, UserRecord};

use crate::view_model::DEFAULT_PAGE_SIZE;

/// How long a notice stays on screen before the Tick sweep removes it.
const NOTICE_TTL_SECONDS: i64 = 4;

/// Current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Static statistics overview
    #[default]
    Dashboard,

    /// User records table with search, pagination, and the edit form
    Users,

    /// Stub mappings list with detail panel and raw JSON editor
    Stubs,
}

impl Screen {
    /// Label used in the header tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Users => "Users",
            Screen::Stubs => "Stubs",
        }
    }
}

/// Transient view state of the user table.
#[derive(Debug, Clone)]
pub struct UsersViewState {
    /// Current search query (applied live as the user types)
    pub search: String,
    /// Whether keystrokes go to the search box
    pub search_active: bool,
    /// 1-based page into the filtered collection
    pub page: usize,
    /// Row cursor within the visible page window
    pub cursor: usize,
    /// A fetch round trip is in flight
    pub loading: bool,
}

impl Default for UsersViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            search_active: false,
            page: 1,
            cursor: 0,
            loading: false,
        }
    }
}

/// Which record the user form is working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Closed,
    Creating,
    /// Editing the record with this id
    Editing(i64),
}

/// Focusable fields of the user form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Birthday,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Birthday,
            FormField::Birthday => FormField::Name,
        }
    }
}

/// State of the create/edit user form.
///
/// Field errors live here rather than in the notice queue: they are cleared
/// on resubmit and rendered inline under the offending field.
#[derive(Debug, Clone, Default)]
pub struct UserFormState {
    pub mode: FormMode,
    pub name: String,
    pub birthday: String,
    pub focus: FormField,
    pub name_error: Option<String>,
    pub birthday_error: Option<String>,
    /// A create/update round trip is in flight; submit is ignored until the
    /// completion message arrives
    pub submitting: bool,
}

impl UserFormState {
    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Closed
    }

    /// Open empty, in create mode.
    pub fn open_create(&mut self) {
        *self = Self {
            mode: FormMode::Creating,
            ..Self::default()
        };
    }

    /// Open seeded from an existing record.
    pub fn open_edit(&mut self, user: &UserRecord) {
        *self = Self {
            mode: FormMode::Editing(user.id),
            name: user.name.clone(),
            birthday: user.birthday.clone(),
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Mutable reference to the text of the focused field.
    pub fn focused_text_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Birthday => &mut self.birthday,
        }
    }

    pub fn clear_errors(&mut self) {
        self.name_error = None;
        self.birthday_error = None;
    }
}

/// Detail panel mode for the selected stub.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Read-only pretty-printed view of the selected stub
    #[default]
    Viewing,
    /// Editing the stub with this id; the buffer holds raw text
    Editing(String),
    /// Composing a new stub from the template
    Creating,
}

/// State of the stub list and its detail panel.
#[derive(Debug, Clone, Default)]
pub struct StubPanelState {
    pub search: String,
    pub search_active: bool,
    /// Id of the selected stub, if any. Selection survives refetches while
    /// the id is still present; see `view_model::retain_selection`.
    pub selected_id: Option<String>,
    /// Set once the user has made or lost a selection; suppresses any later
    /// auto-select of the first stub
    pub selection_touched: bool,
    pub editor: EditorMode,
    /// Raw editor text. Kept verbatim on a failed parse so the user can fix
    /// the malformed JSON in place.
    pub buffer: String,
    /// Parse error from the last save attempt
    pub json_error: Option<String>,
    /// A create/update round trip is in flight
    pub saving: bool,
    pub loading: bool,
}

impl StubPanelState {
    pub fn is_editing(&self) -> bool {
        !matches!(self.editor, EditorMode::Viewing)
    }

    pub fn close_editor(&mut self) {
        self.editor = EditorMode::Viewing;
        self.buffer.clear();
        self.json_error = None;
    }
}

/// What a pending delete confirmation refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    User { id: i64, name: String },
    Stub { id: String },
}

/// Modal confirmation before a destructive delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDeleteState {
    pub target: DeleteTarget,
    /// The delete round trip is in flight; confirm is ignored until the
    /// completion message arrives
    pub deleting: bool,
}

impl ConfirmDeleteState {
    pub fn new(target: DeleteTarget) -> Self {
        Self {
            target,
            deleting: false,
        }
    }

    /// Prompt text rendered in the dialog body.
    pub fn prompt(&self) -> String {
        match &self.target {
            DeleteTarget::User { name, .. } => {
                format!("Delete user \"{name}\"? This cannot be undone.")
            }
            DeleteTarget::Stub { id } => {
                format!("Delete stub mapping {id}? This cannot be undone.")
            }
        }
    }
}

/// A notice with its arrival time, for TTL-based expiry.
#[derive(Debug, Clone)]
pub struct TimedNotice {
    pub notice: Notice,
    pub shown_at: DateTime<Utc>,
}

/// Static dashboard figures.
///
/// The overview screen renders fixed values rather than live aggregates;
/// the collections themselves are always fetched fresh.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total_users: u64,
    pub active_stubs: u64,
    pub system_status: &'static str,
    pub uptime: &'static str,
}

impl Default for DashboardStats {
    fn default() -> Self {
        Self {
            total_users: 1250,
            active_stubs: 48,
            system_status: "Healthy",
            uptime: "99.9%",
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub quitting: bool,

    /// Last fetched user collection, unfiltered
    pub users: Vec<UserRecord>,
    /// Last fetched stub collection, envelope already unwrapped
    pub stubs: Vec<StubMapping>,

    pub users_view: UsersViewState,
    pub user_form: UserFormState,
    pub stub_panel: StubPanelState,
    pub confirm_delete: Option<ConfirmDeleteState>,

    pub notices: Vec<TimedNotice>,
    pub stats: DashboardStats,

    /// Rows per user-table page, from config
    pub page_size: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            screen: Screen::default(),
            quitting: false,
            users: Vec::new(),
            stubs: Vec::new(),
            users_view: UsersViewState::default(),
            user_form: UserFormState::default(),
            stub_panel: StubPanelState::default(),
            confirm_delete: None,
            notices: Vec::new(),
            stats: DashboardStats::default(),
            page_size: page_size.max(1),
        }
    }

    /// Queue a notice for display.
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(TimedNotice {
            notice,
            shown_at: Utc::now(),
        });
    }

    /// Drop notices older than the display TTL. Called on Tick.
    pub fn prune_notices(&mut self, now: DateTime<Utc>) {
        let ttl = Duration::seconds(NOTICE_TTL_SECONDS);
        self.notices.retain(|timed| now - timed.shown_at < ttl);
    }

    /// Whether a modal (form, editor, or confirm dialog) owns the keyboard.
    pub fn modal_open(&self) -> bool {
        self.user_form.is_open() || self.stub_panel.is_editing() || self.confirm_delete.is_some()
    }
}
