//! The identity directory: the set of known identities and their
//! credentials.
//!
//! The secret lives here, next to but never inside the [`Identity`], so
//! everything handed to callers or persisted is credential-free by
//! construction.

use ratehub_core::Identity;

/// A known identity together with its password.
#[derive(Debug, Clone)]
pub struct IdentityRecord {
    /// The credential-free identity.
    pub identity: Identity,
    /// The plaintext password.
    ///
    /// This directory simulates a backend credential store for a demo
    /// dataset; the seeding contract is plaintext pairs like
    /// `admin@example.com` / `Admin@123`.
    pub password: String,
}

impl IdentityRecord {
    /// Create a record.
    pub fn new(identity: Identity, password: impl Into<String>) -> Self {
        Self {
            identity,
            password: password.into(),
        }
    }
}

/// The set of identities known to the session store.
///
/// Email is the lookup key; matching is exact.
#[derive(Debug, Clone, Default)]
pub struct IdentityDirectory {
    records: Vec<IdentityRecord>,
}

impl IdentityDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory seeded with records.
    pub fn from_records(records: Vec<IdentityRecord>) -> Self {
        Self { records }
    }

    /// Look up a record by exact email.
    pub fn find_by_email(&self, email: &str) -> Option<&IdentityRecord> {
        self.records.iter().find(|r| r.identity.email == email)
    }

    /// Check whether an email is already taken.
    pub fn contains_email(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    /// Add a record. The caller is responsible for the duplicate check.
    pub fn insert(&mut self, record: IdentityRecord) {
        self.records.push(record);
    }

    /// Iterate over the known identities (without credentials).
    pub fn identities(&self) -> impl Iterator<Item = &Identity> {
        self.records.iter().map(|r| &r.identity)
    }

    /// Number of known identities.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratehub_core::{Role, UserId};

    fn record(email: &str) -> IdentityRecord {
        IdentityRecord::new(
            Identity::new(UserId::generate(), "Some Known Test Identity", email, Role::User, "1 Test Lane"),
            "Secret@123",
        )
    }

    #[test]
    fn test_lookup_is_exact() {
        let directory = IdentityDirectory::from_records(vec![record("user@example.com")]);
        assert!(directory.find_by_email("user@example.com").is_some());
        assert!(directory.find_by_email("USER@example.com").is_none());
        assert!(directory.find_by_email("other@example.com").is_none());
    }

    #[test]
    fn test_insert_and_count() {
        let mut directory = IdentityDirectory::new();
        assert!(directory.is_empty());
        directory.insert(record("a@example.com"));
        directory.insert(record("b@example.com"));
        assert_eq!(directory.len(), 2);
        assert!(directory.contains_email("b@example.com"));
        assert_eq!(directory.identities().count(), 2);
    }
}
