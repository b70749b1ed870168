use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that may occur in this library.
#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum Error {
    /// An argument was absent or otherwise not usable.
    #[error("{0}")]
    InvalidArgument(String),

    /// A configuration could not be read or understood.
    #[error("Bad configuration: {0}")]
    BadConfig(String),

    /// Logging could not be set up as asked.
    #[error("Could not set up logging: {0}")]
    Logging(String),
}

impl Error {
    /// Login was attempted without a username or password.
    pub(crate) fn missing_credentials() -> Self {
        Self::InvalidArgument("Username or password is null".into())
    }
}
