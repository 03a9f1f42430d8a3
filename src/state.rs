use crate::accounts::{AccountsConfig, User, UserId};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StateError {
    #[error("No deletion is pending")]
    NothingPending,
    #[error("User {0} not found")]
    UnknownUser(UserId),
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: AccountsConfig,
    pub pending_delete: Option<UserId>,
    pub message: Option<Message>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub text: String,
    pub is_error: bool,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: AccountsConfig::new(),
            pending_delete: None,
            message: None,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.config.users
    }

    pub fn pending_user(&self) -> Option<&User> {
        self.pending_delete
            .and_then(|id| self.config.find_user(id))
    }

    /// Name shown in the dialog; empty while nothing is pending.
    pub fn pending_user_name(&self) -> String {
        self.pending_user()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    }

    pub fn request_delete(&mut self, id: UserId) -> Result<(), StateError> {
        if self.config.find_user(id).is_none() {
            return Err(StateError::UnknownUser(id));
        }
        self.pending_delete = Some(id);
        self.clear_message();
        Ok(())
    }

    pub fn is_delete_pending(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Returns the user whose deletion was cancelled, if one was pending.
    pub fn cancel_delete(&mut self) -> Option<UserId> {
        self.pending_delete.take()
    }

    /// Removes the pending user from the roster and returns it.
    pub fn confirm_delete(&mut self) -> Result<User, StateError> {
        let id = self.pending_delete.take().ok_or(StateError::NothingPending)?;
        let index = self
            .config
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StateError::UnknownUser(id))?;
        Ok(self.config.users.remove(index))
    }

    pub fn set_message(&mut self, message: Message) {
        self.message = Some(message);
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_state() -> AppState {
        AppState {
            config: AccountsConfig::seeded(),
            ..AppState::new()
        }
    }

    #[test]
    fn test_request_delete_sets_pending_user() {
        let mut state = seeded_state();
        state.set_message(Message::success("old"));
        let ahmed = state.users()[0].id;

        state.request_delete(ahmed).unwrap();
        assert_eq!(state.pending_user_name(), "Ahmed");
        assert!(state.message.is_none());
    }

    #[test]
    fn test_request_delete_unknown_user() {
        let mut state = seeded_state();
        let stranger = UserId::new();
        assert_eq!(
            state.request_delete(stranger),
            Err(StateError::UnknownUser(stranger))
        );
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn test_cancel_keeps_roster() {
        let mut state = seeded_state();
        let id = state.users()[1].id;
        state.request_delete(id).unwrap();

        assert_eq!(state.cancel_delete(), Some(id));
        assert!(!state.is_delete_pending());
        assert_eq!(state.users().len(), 3);
        assert_eq!(state.pending_user_name(), "");
    }

    #[test]
    fn test_cancel_without_pending_is_noop() {
        let mut state = seeded_state();
        assert!(!state.is_delete_pending());
        assert_eq!(state.cancel_delete(), None);
        assert_eq!(state.users().len(), 3);
    }

    #[test]
    fn test_confirm_removes_pending_user() {
        let mut state = seeded_state();
        let id = state.users()[1].id;
        state.request_delete(id).unwrap();

        let removed = state.confirm_delete().unwrap();
        assert_eq!(removed.name, "Mariam");
        assert!(state.pending_delete.is_none());
        assert!(state.config.find_user(id).is_none());
        assert_eq!(state.users().len(), 2);
    }

    #[test]
    fn test_confirm_without_pending() {
        let mut state = seeded_state();
        assert_eq!(state.confirm_delete(), Err(StateError::NothingPending));
        assert_eq!(state.users().len(), 3);
    }

    #[test]
    fn test_confirm_after_user_vanished() {
        let mut state = seeded_state();
        let id = state.users()[0].id;
        state.request_delete(id).unwrap();
        state.config.users.retain(|u| u.id != id);

        assert_eq!(state.confirm_delete(), Err(StateError::UnknownUser(id)));
        assert!(state.pending_delete.is_none());
    }
}
