use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The identifier of a user.
/// Not guaranteed to be unique within a registry.
pub type UserId = i32;

/// A user known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,

    // Stored and compared as given.
    password: String,
}

impl User {
    /// Create a user.
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    /// The user's id.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// The user's name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The user's password.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub(crate) fn has_credentials(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{})", self.username, self.id)
    }
}
