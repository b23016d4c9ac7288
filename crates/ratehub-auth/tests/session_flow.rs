//! End-to-end session flow against the seed dataset.

use ratehub_auth::{AuthError, IdentityDirectory, IdentityRecord, SessionStore};
use ratehub_core::{Identity, Role, UserId};
use ratehub_kv::{FileStore, MemoryStore};
use std::time::Duration;

fn seeds() -> IdentityDirectory {
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
    ])
}

#[test]
fn seeded_login_then_failed_login_keeps_session() {
    let sessions = SessionStore::new(MemoryStore::new(), seeds()).with_latency(Duration::ZERO);

    // Valid login returns the seeded user role and establishes the session.
    let identity = sessions.login("user@example.com", "User@123").unwrap();
    assert_eq!(identity.role, Role::User);
    assert_eq!(sessions.current_identity(), Some(identity.clone()));

    // A wrong password fails without touching the established session.
    let err = sessions.login("user@example.com", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(sessions.current_identity(), Some(identity));
}

#[test]
fn admin_login_has_admin_role() {
    let sessions = SessionStore::new(MemoryStore::new(), seeds()).with_latency(Duration::ZERO);
    let identity = sessions.login("admin@example.com", "Admin@123").unwrap();
    assert_eq!(identity.role, Role::Admin);
    assert_eq!(identity.id, UserId::new("admin-1"));
}

#[test]
fn session_survives_restart_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let identity = {
        let sessions = SessionStore::new(FileStore::open(&path).unwrap(), seeds())
            .with_latency(Duration::ZERO);
        sessions.login("admin@example.com", "Admin@123").unwrap()
    };

    // A fresh session store over the same state file restores the
    // identity on startup.
    let sessions =
        SessionStore::new(FileStore::open(&path).unwrap(), seeds()).with_latency(Duration::ZERO);
    assert_eq!(sessions.current_identity(), Some(identity));

    sessions.logout().unwrap();
    let after_logout =
        SessionStore::new(FileStore::open(&path).unwrap(), seeds()).with_latency(Duration::ZERO);
    assert_eq!(after_logout.current_identity(), None);
}
