mod confirm_delete_dialog;
mod header;
mod status_bar;
mod user_list;

pub use confirm_delete_dialog::ConfirmDeleteDialog;
pub use header::Header;
pub use status_bar::StatusBar;
pub use user_list::UserList;
