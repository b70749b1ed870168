#![allow(dead_code)]

use user_registry::{logging, registry::UserRegistry, user::User};

pub fn alex() -> User {
    User::new(1, "Alexander", "password")
}

pub fn john() -> User {
    User::new(2, "John", "pass")
}

/// A fresh, empty registry, with logging set up.
pub fn registry() -> UserRegistry {
    logging::init(tracing::Level::DEBUG, None).expect("No file logging asked for");

    UserRegistry::new()
}
