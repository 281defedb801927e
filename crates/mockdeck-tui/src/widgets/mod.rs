//! Custom widget components

mod confirm_dialog;
mod dashboard;
mod header;
mod notices;
mod status_bar;
mod stub_panel;
mod user_form;
mod users_table;

pub use confirm_dialog::ConfirmDialog;
pub use dashboard::Dashboard;
pub use header::MainHeader;
pub use notices::NoticeStack;
pub use status_bar::StatusBar;
pub use stub_panel::{StubDetail, StubList};
pub use user_form::UserForm;
pub use users_table::UsersTable;
