//! Identity and role types.

use crate::ids::{StoreId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of an identity, determining which destinations it may view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Regular user. The default for new registrations.
    #[default]
    User,
    /// Owner of a store on the platform.
    StoreOwner,
}

impl Role {
    /// Get the role as its stable string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::StoreOwner => "store_owner",
        }
    }

    /// All roles, for iteration in admin views.
    pub fn all() -> &'static [Role] {
        &[Role::Admin, Role::User, Role::StoreOwner]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            "store_owner" => Ok(Role::StoreOwner),
            _ => Err(()),
        }
    }
}

/// The authenticated actor record.
///
/// Deliberately carries no credential field: the secret lives only in the
/// identity directory, so a persisted or returned `Identity` can never leak
/// a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address. Uniqueness key for authentication lookup.
    pub email: String,
    /// Role of this identity.
    pub role: Role,
    /// Postal address.
    pub address: String,
    /// Store owned by this identity. Only meaningful for
    /// [`Role::StoreOwner`]; an owner may have no store assigned yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_id: Option<StoreId>,
}

impl Identity {
    /// Create a new identity with no associated store.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            address: address.into(),
            store_id: None,
        }
    }

    /// Associate a store with this identity.
    pub fn with_store(mut self, store_id: StoreId) -> Self {
        self.store_id = Some(store_id);
        self
    }

    /// Check whether this identity is an administrator.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Check whether this identity owns stores.
    pub fn is_store_owner(&self) -> bool {
        self.role == Role::StoreOwner
    }
}
