use std::fmt::Debug;

use crate::user::UserId;

/// Something outside the registry which is able to delete users.
///
/// A registry may be handed one of these when constructed,
/// but never calls it.
/// Callers fetch it via [`crate::registry::UserRegistry::dao`] if they need it.
pub trait UserDao: Debug + Send + Sync {
    /// Delete the user with the given id.
    /// Returns whether anything was deleted.
    fn delete(&self, id: UserId) -> bool;
}
