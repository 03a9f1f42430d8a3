//! Interaction model for the delete confirmation dialog.
//!
//! Every click target and key press the dialog reacts to resolves to at most
//! one [`DialogIntent`]. The component only forwards intents to its callbacks.

/// Key name reported by the webview for the Escape key.
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogTarget {
    /// Dimmed area around the panel.
    Backdrop,
    /// Anywhere inside the panel that is not an action control.
    Panel,
    CloseButton,
    CancelButton,
    DeleteButton,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DialogIntent {
    Confirm,
    Cancel,
}

pub fn intent_for_click(target: DialogTarget) -> Option<DialogIntent> {
    match target {
        DialogTarget::Backdrop | DialogTarget::CloseButton | DialogTarget::CancelButton => {
            Some(DialogIntent::Cancel)
        }
        DialogTarget::DeleteButton => Some(DialogIntent::Confirm),
        DialogTarget::Panel => None,
    }
}

pub fn intent_for_key(key: &str) -> Option<DialogIntent> {
    (key == ESCAPE_KEY).then_some(DialogIntent::Cancel)
}

/// The name is interpolated verbatim.
pub fn confirmation_message(user_name: &str) -> String {
    format!("Are you sure you want to delete \"{user_name}\"? This action cannot be undone.")
}
