//! The session store: single authority for "who is signed in".

use crate::directory::{IdentityDirectory, IdentityRecord};
use crate::token::AuthToken;
use crate::AuthError;
use ratehub_core::{Identity, Role, UserId};
use ratehub_kv::{KeyValueStore, StorageError};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Repository key holding the opaque session token.
pub const TOKEN_KEY: &str = "auth_token";
/// Repository key holding the JSON-serialized identity.
pub const USER_KEY: &str = "user_data";

/// Registration input for [`SessionStore::register`].
///
/// There is no role field: new registrations are always [`Role::User`],
/// whatever the caller might have wanted.
///
/// Input validation (`ratehub_core::validate`) is the caller's
/// responsibility; this type carries the fields as submitted.
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
}

/// Outcome of a password change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    /// Confirmation message for inline display.
    pub message: String,
}

/// Single authority for the current authenticated identity.
///
/// Constructed once per application instance with an explicitly injected
/// repository and an identity directory. Mutated only by explicit user
/// actions; the route guard reads it on every navigation via
/// [`current_identity`](SessionStore::current_identity).
///
/// # Example
///
/// ```rust
/// use ratehub_auth::{IdentityDirectory, IdentityRecord, SessionStore};
/// use ratehub_core::{Identity, Role, UserId};
/// use ratehub_kv::MemoryStore;
/// use std::time::Duration;
///
/// let directory = IdentityDirectory::from_records(vec![IdentityRecord::new(
///     Identity::new(UserId::new("admin-1"), "System Administrator", "admin@example.com", Role::Admin, "123 Admin Street"),
///     "Admin@123",
/// )]);
/// let sessions = SessionStore::new(MemoryStore::new(), directory)
///     .with_latency(Duration::ZERO);
///
/// let identity = sessions.login("admin@example.com", "Admin@123").unwrap();
/// assert_eq!(sessions.current_identity(), Some(identity));
/// ```
pub struct SessionStore<S: KeyValueStore> {
    repo: S,
    directory: Mutex<IdentityDirectory>,
    latency: Duration,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Simulated backend delay applied to login, registration, and
    /// password changes, so callers can exercise pending states.
    /// Override with [`with_latency`](SessionStore::with_latency).
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

    /// Create a session store over a repository and an identity directory.
    pub fn new(repo: S, directory: IdentityDirectory) -> Self {
        Self {
            repo,
            directory: Mutex::new(directory),
            latency: Self::DEFAULT_LATENCY,
        }
    }

    /// Set the simulated latency. Tests pass `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// The configured simulated latency.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Authenticate by exact email and password.
    ///
    /// On success the session record (token + credential-free identity) is
    /// persisted and the identity returned. On failure nothing changes:
    /// any prior session stays intact.
    pub fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.simulate_backend();

        let directory = self.directory()?;
        let identity = match directory.find_by_email(email) {
            Some(record) if record.password == password => record.identity.clone(),
            _ => {
                tracing::warn!(email, "login rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };
        drop(directory);

        self.persist_session(&identity)?;
        tracing::info!(user = %identity.id, role = %identity.role, "login succeeded");
        Ok(identity)
    }

    /// Register a new identity and sign it in.
    ///
    /// Fails with [`AuthError::DuplicateEmail`] if the email is already
    /// known, writing nothing. Otherwise the identity gets a fresh id,
    /// role [`Role::User`], and is recorded in the directory so the email
    /// stays taken and the password works for later logins.
    pub fn register(&self, new_identity: NewIdentity) -> Result<Identity, AuthError> {
        self.simulate_backend();

        let mut directory = self.directory()?;
        if directory.contains_email(&new_identity.email) {
            tracing::warn!(email = %new_identity.email, "registration rejected, email taken");
            return Err(AuthError::DuplicateEmail(new_identity.email));
        }

        let identity = Identity::new(
            UserId::generate(),
            new_identity.name,
            new_identity.email,
            Role::User,
            new_identity.address,
        );

        self.persist_session(&identity)?;
        directory.insert(IdentityRecord::new(identity.clone(), new_identity.password));
        tracing::info!(user = %identity.id, "registration succeeded");
        Ok(identity)
    }

    /// Erase the persisted session unconditionally. Idempotent: with no
    /// active session this is a no-op, not an error.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.repo.remove(TOKEN_KEY)?;
        self.repo.remove(USER_KEY)?;
        tracing::debug!("session cleared");
        Ok(())
    }

    /// The currently signed-in identity, restored from the repository.
    ///
    /// `None` when no session record exists, when it fails to parse, or
    /// when the repository itself fails. Never returns an error: the
    /// route guard calls this on every navigation and an unreadable
    /// session simply means "signed out".
    pub fn current_identity(&self) -> Option<Identity> {
        let token = self.repo.get(TOKEN_KEY).ok()??;
        debug_assert!(!token.is_empty());
        self.repo.get_json::<Identity>(USER_KEY).ok()?
    }

    /// The persisted session token, if any.
    pub fn auth_token(&self) -> Option<AuthToken> {
        let token = self.repo.get(TOKEN_KEY).ok()??;
        Some(AuthToken::new(token))
    }

    /// Whether a session record is present.
    pub fn is_authenticated(&self) -> bool {
        self.auth_token().is_some()
    }

    /// Change the signed-in identity's password.
    ///
    /// The simulated backend accepts any current password and reports
    /// success after the configured delay; no credential store is
    /// authoritative here, so there is nothing to check the current
    /// password against.
    pub fn change_password(&self, _current: &str, _new: &str) -> Result<PasswordChange, AuthError> {
        self.simulate_backend();
        tracing::debug!("password change simulated");
        Ok(PasswordChange {
            message: "Password updated successfully".to_string(),
        })
    }

    /// Snapshot of all known identities, for admin views.
    pub fn known_identities(&self) -> Result<Vec<Identity>, AuthError> {
        Ok(self.directory()?.identities().cloned().collect())
    }

    /// Number of known identities, for aggregate statistics.
    pub fn identity_count(&self) -> Result<usize, AuthError> {
        Ok(self.directory()?.len())
    }

    /// Borrow the underlying repository.
    pub fn repository(&self) -> &S {
        &self.repo
    }

    fn directory(&self) -> Result<MutexGuard<'_, IdentityDirectory>, AuthError> {
        self.directory
            .lock()
            .map_err(|_| StorageError::Unavailable("identity directory poisoned".to_string()).into())
    }

    /// Write the session record. The identity goes first so a token is
    /// never present without one; if either write fails, both keys are
    /// cleared so a half-written record reads as signed out rather than a
    /// token with stale or missing identity data.
    fn persist_session(&self, identity: &Identity) -> Result<(), AuthError> {
        let token = AuthToken::generate();
        let written = self
            .repo
            .set_json(USER_KEY, identity)
            .and_then(|()| self.repo.set(TOKEN_KEY, token.as_str()));
        if let Err(err) = written {
            let _ = self.repo.remove(TOKEN_KEY);
            let _ = self.repo.remove(USER_KEY);
            return Err(err.into());
        }
        Ok(())
    }

    fn simulate_backend(&self) {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratehub_core::StoreId;
    use ratehub_kv::MemoryStore;

    fn seeded_directory() -> IdentityDirectory {
        IdentityDirectory::from_records(vec![
            IdentityRecord::new(
                Identity::new(
                    UserId::new("admin-1"),
                    "System Administrator",
                    "admin@example.com",
                    Role::Admin,
                    "123 Admin Street, Admin City",
                ),
                "Admin@123",
            ),
            IdentityRecord::new(
                Identity::new(
                    UserId::new("user-1"),
                    "John Regular User",
                    "user@example.com",
                    Role::User,
                    "456 User Avenue, User Town",
                ),
                "User@123",
            ),
            IdentityRecord::new(
                Identity::new(
                    UserId::new("store-1"),
                    "Store Owner",
                    "store@example.com",
                    Role::StoreOwner,
                    "789 Store Boulevard, Store City",
                )
                .with_store(StoreId::new("1")),
                "Store@123",
            ),
        ])
    }

    fn sessions() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::new(), seeded_directory()).with_latency(Duration::ZERO)
    }

    fn registration(email: &str) -> NewIdentity {
        NewIdentity {
            name: "A Perfectly Valid Name".to_string(),
            email: email.to_string(),
            password: "Fresh@123".to_string(),
            address: "1 New Road".to_string(),
        }
    }

    #[test]
    fn test_login_returns_seeded_identity() {
        let sessions = sessions();
        let identity = sessions.login("user@example.com", "User@123").unwrap();
        assert_eq!(identity.role, Role::User);
        assert_eq!(identity.email, "user@example.com");
        assert!(sessions.is_authenticated());
    }

    #[test]
    fn test_login_unknown_email_fails() {
        let sessions = sessions();
        let err = sessions.login("nobody@example.com", "User@123").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(sessions.current_identity(), None);
    }

    #[test]
    fn test_login_wrong_password_leaves_prior_session() {
        let sessions = sessions();
        let prior = sessions.login("user@example.com", "User@123").unwrap();

        let err = sessions.login("user@example.com", "wrong").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(sessions.current_identity(), Some(prior));
    }

    #[test]
    fn test_login_round_trip() {
        let sessions = sessions();
        let identity = sessions.login("store@example.com", "Store@123").unwrap();
        assert_eq!(sessions.current_identity(), Some(identity.clone()));
        assert_eq!(identity.store_id, Some(StoreId::new("1")));
    }

    #[test]
    fn test_register_duplicate_email_writes_nothing() {
        let sessions = sessions();
        let err = sessions.register(registration("user@example.com")).unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail(email) if email == "user@example.com"));
        assert_eq!(sessions.current_identity(), None);
        assert_eq!(sessions.identity_count().unwrap(), 3);
    }

    #[test]
    fn test_register_fresh_email_yields_user_role() {
        let sessions = sessions();
        let identity = sessions.register(registration("new@example.com")).unwrap();
        assert_eq!(identity.role, Role::User);
        assert_eq!(identity.store_id, None);
        assert_eq!(sessions.current_identity(), Some(identity));
        assert_eq!(sessions.identity_count().unwrap(), 4);
    }

    #[test]
    fn test_registered_identity_can_log_back_in() {
        let sessions = sessions();
        let registered = sessions.register(registration("new@example.com")).unwrap();
        sessions.logout().unwrap();

        let logged_in = sessions.login("new@example.com", "Fresh@123").unwrap();
        assert_eq!(logged_in, registered);
    }

    #[test]
    fn test_second_registration_of_same_email_fails() {
        let sessions = sessions();
        sessions.register(registration("new@example.com")).unwrap();
        let err = sessions.register(registration("new@example.com")).unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail(_)));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let sessions = sessions();
        sessions.login("user@example.com", "User@123").unwrap();

        sessions.logout().unwrap();
        assert_eq!(sessions.current_identity(), None);
        assert!(!sessions.is_authenticated());

        sessions.logout().unwrap();
        assert_eq!(sessions.current_identity(), None);
    }

    #[test]
    fn test_current_identity_none_on_garbage_record() {
        let sessions = sessions();
        sessions.repository().set(TOKEN_KEY, "tok_x").unwrap();
        sessions.repository().set(USER_KEY, "not json").unwrap();
        assert_eq!(sessions.current_identity(), None);
    }

    #[test]
    fn test_change_password_simulates_success() {
        let sessions = sessions();
        let outcome = sessions.change_password("whatever", "Next@1234").unwrap();
        assert_eq!(outcome.message, "Password updated successfully");
    }

    #[test]
    fn test_default_latency_is_bounded_nonzero() {
        let sessions = SessionStore::new(MemoryStore::new(), IdentityDirectory::new());
        assert!(!sessions.latency().is_zero());
        assert!(sessions.latency() <= Duration::from_secs(2));
    }

    mod partial_write {
        use super::*;
        use ratehub_kv::StorageError;
        use std::sync::atomic::{AtomicBool, Ordering};

        /// Repository double whose writes to one key can be made to fail
        /// while everything else keeps working.
        struct FlakyStore {
            inner: MemoryStore,
            fail_key: &'static str,
            armed: AtomicBool,
        }

        impl FlakyStore {
            fn new(fail_key: &'static str, armed: bool) -> Self {
                Self {
                    inner: MemoryStore::new(),
                    fail_key,
                    armed: AtomicBool::new(armed),
                }
            }

            fn arm(&self) {
                self.armed.store(true, Ordering::SeqCst);
            }
        }

        impl KeyValueStore for FlakyStore {
            fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
                self.inner.get(key)
            }
            fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
                if self.armed.load(Ordering::SeqCst) && key == self.fail_key {
                    return Err(StorageError::Unavailable("write failed".to_string()));
                }
                self.inner.set(key, value)
            }
            fn remove(&self, key: &str) -> Result<(), StorageError> {
                self.inner.remove(key)
            }
            fn keys(&self) -> Result<Vec<String>, StorageError> {
                self.inner.keys()
            }
        }

        #[test]
        fn test_failed_identity_write_reads_as_signed_out() {
            let sessions = SessionStore::new(FlakyStore::new(USER_KEY, true), seeded_directory())
                .with_latency(Duration::ZERO);

            let err = sessions.login("user@example.com", "User@123").unwrap_err();
            assert!(matches!(err, AuthError::Storage(_)));
            assert!(!sessions.is_authenticated());
            assert_eq!(sessions.current_identity(), None);
        }

        #[test]
        fn test_failed_token_write_leaves_no_dangling_record() {
            let sessions = SessionStore::new(FlakyStore::new(TOKEN_KEY, true), seeded_directory())
                .with_latency(Duration::ZERO);

            let err = sessions.login("user@example.com", "User@123").unwrap_err();
            assert!(matches!(err, AuthError::Storage(_)));
            assert!(!sessions.is_authenticated());
            assert_eq!(sessions.current_identity(), None);
        }

        #[test]
        fn test_failed_relogin_never_mixes_sessions() {
            let sessions = SessionStore::new(FlakyStore::new(TOKEN_KEY, false), seeded_directory())
                .with_latency(Duration::ZERO);
            sessions.login("user@example.com", "User@123").unwrap();

            sessions.repository().arm();
            let err = sessions.login("admin@example.com", "Admin@123").unwrap_err();
            assert!(matches!(err, AuthError::Storage(_)));

            // Token and identity always agree: either both present or
            // neither, never a token over another identity's record.
            assert_eq!(sessions.is_authenticated(), sessions.current_identity().is_some());
            assert_eq!(sessions.current_identity(), None);
        }

        #[test]
        fn test_register_partial_failure_keeps_email_free() {
            let sessions = SessionStore::new(FlakyStore::new(TOKEN_KEY, true), seeded_directory())
                .with_latency(Duration::ZERO);

            let err = sessions.register(registration("new@example.com")).unwrap_err();
            assert!(matches!(err, AuthError::Storage(_)));
            assert!(!sessions.is_authenticated());
            assert_eq!(sessions.identity_count().unwrap(), 3);

            // The email stays available for a retry once storage recovers.
            sessions.repository().armed.store(false, Ordering::SeqCst);
            assert!(sessions.register(registration("new@example.com")).is_ok());
        }
    }

    mod unavailable_storage {
        use super::*;
        use ratehub_kv::StorageError;

        /// Repository double that always reports storage unavailable.
        struct UnavailableStore;

        impl KeyValueStore for UnavailableStore {
            fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
                Err(StorageError::Unavailable("disabled".to_string()))
            }
            fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
                Err(StorageError::Unavailable("disabled".to_string()))
            }
            fn remove(&self, _key: &str) -> Result<(), StorageError> {
                Err(StorageError::Unavailable("disabled".to_string()))
            }
            fn keys(&self) -> Result<Vec<String>, StorageError> {
                Err(StorageError::Unavailable("disabled".to_string()))
            }
        }

        fn sessions() -> SessionStore<UnavailableStore> {
            SessionStore::new(UnavailableStore, seeded_directory()).with_latency(Duration::ZERO)
        }

        #[test]
        fn test_login_surfaces_storage_error() {
            let err = sessions().login("user@example.com", "User@123").unwrap_err();
            assert!(matches!(err, AuthError::Storage(_)));
            assert!(!err.is_auth_failure());
        }

        #[test]
        fn test_current_identity_degrades_to_signed_out() {
            assert_eq!(sessions().current_identity(), None);
            assert!(!sessions().is_authenticated());
        }

        #[test]
        fn test_logout_surfaces_storage_error() {
            assert!(matches!(sessions().logout().unwrap_err(), AuthError::Storage(_)));
        }
    }
}
