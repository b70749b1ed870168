//! The registry keeps users in memory, in the order they were added.
//!
//! Nothing is validated on the way in.
//! In particular, several users may share an id.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    config::Config,
    dao::UserDao,
    error::Error,
    user::{User, UserId},
};

/// An in-memory collection of users.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Vec<User>,

    // Held on behalf of callers, never used here.
    dao: Option<Box<dyn UserDao>>,
}

impl UserRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty registry holding on to something able to delete users.
    pub fn with_dao(dao: Box<dyn UserDao>) -> Self {
        Self {
            users: vec![],
            dao: Some(dao),
        }
    }

    /// A registry seeded with the users found in the configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();
        registry.add(config.users.iter().cloned());

        registry
    }

    /// The user deleter handed to this registry, if any.
    pub fn dao(&self) -> Option<&dyn UserDao> {
        self.dao.as_deref()
    }

    /// Append users, keeping their order.
    pub fn add<I: IntoIterator<Item = User>>(&mut self, users: I) {
        let before = self.users.len();
        self.users.extend(users);

        debug!(
            added = self.users.len() - before,
            total = self.users.len(),
            "Users added"
        );
    }

    /// Find the first user (in insertion order) with exactly this username and password.
    ///
    /// Either argument being `None` is an error.
    pub fn login(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Option<User>, Error> {
        let (Some(username), Some(password)) = (username, password) else {
            debug!("Login attempted without credentials");
            return Err(Error::missing_credentials());
        };

        let user = self
            .users
            .iter()
            .find(|user| user.has_credentials(username, password))
            .cloned();

        match &user {
            Some(user) => debug!(%user, "Login ok"),
            None => debug!(username, "Login did not match any user"),
        }

        Ok(user)
    }

    /// A snapshot of the users keyed by id.
    /// When ids are shared, the user added last is the one kept.
    pub fn users_mapped_by_id(&self) -> HashMap<UserId, User> {
        let mapped: HashMap<_, _> = self
            .users
            .iter()
            .map(|user| (user.id(), user.clone()))
            .collect();

        trace!(
            users = self.users.len(),
            ids = mapped.len(),
            "Mapped users by id"
        );

        mapped
    }

    /// The users, in the order they were added.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// How many users are stored.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// True if no users have been added.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Extend<User> for UserRegistry {
    fn extend<T: IntoIterator<Item = User>>(&mut self, iter: T) {
        self.add(iter)
    }
}

impl FromIterator<User> for UserRegistry {
    fn from_iter<T: IntoIterator<Item = User>>(iter: T) -> Self {
        let mut registry = Self::new();
        registry.add(iter);

        registry
    }
}
