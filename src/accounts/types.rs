use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AccountsConfig {
    #[serde(default)]
    pub users: Vec<User>,
}

impl AccountsConfig {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Roster used when no config file exists yet.
    pub fn seeded() -> Self {
        Self {
            users: vec![
                User::new("Ahmed", "ahmed@example.com"),
                User::new("Mariam", "mariam@example.com"),
                User::new("Jonas", "jonas@example.com"),
            ],
        }
    }

    pub fn find_user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_ids_are_unique() {
        let a = User::new("a", "a@example.com");
        let b = User::new("a", "a@example.com");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_user_id_serializes_as_plain_uuid() {
        let id = UserId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn test_missing_email_defaults_to_empty() {
        let json = r#"{ "id": "67e55044-10b1-426f-9247-bb680e5fe0c8", "name": "Ahmed" }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Ahmed");
        assert!(user.email.is_empty());
    }

    #[test]
    fn test_find_user() {
        let config = AccountsConfig::seeded();
        let id = config.users[1].id;
        assert_eq!(config.find_user(id).map(|u| u.name.as_str()), Some("Mariam"));
        assert!(config.find_user(UserId::new()).is_none());
    }
}
