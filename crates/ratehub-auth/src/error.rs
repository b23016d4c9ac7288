//! Authentication errors.

use ratehub_kv::StorageError;
use thiserror::Error;

/// Authentication error type.
///
/// Both credential failures are recoverable and surfaced verbatim as
/// inline form feedback; neither changes session store state.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email or wrong password. The two cases are deliberately
    /// indistinguishable to the caller.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an email already in the directory.
    #[error("Email already exists: {0}")]
    DuplicateEmail(String),

    /// The session repository failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Check if this is a credential failure (as opposed to a storage
    /// fault).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, AuthError::InvalidCredentials | AuthError::DuplicateEmail(_))
    }
}
