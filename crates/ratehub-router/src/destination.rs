//! Navigable destinations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A navigable destination in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    /// Sign-in page. Public-only.
    Login,
    /// Registration page. Public-only.
    Register,
    /// Default destination for authenticated identities.
    Dashboard,
    /// Store listing and rating.
    Stores,
    /// User administration. Admin-only.
    Users,
    /// Profile and password settings.
    Profile,
}

impl Destination {
    /// The destination's stable path.
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::Register => "/register",
            Destination::Dashboard => "/dashboard",
            Destination::Stores => "/stores",
            Destination::Users => "/users",
            Destination::Profile => "/profile",
        }
    }

    /// All destinations, in navigation order.
    pub fn all() -> &'static [Destination] {
        &[
            Destination::Login,
            Destination::Register,
            Destination::Dashboard,
            Destination::Stores,
            Destination::Users,
            Destination::Profile,
        ]
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Destination {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.strip_prefix('/').unwrap_or(s);
        match path {
            "login" => Ok(Destination::Login),
            "register" => Ok(Destination::Register),
            "dashboard" => Ok(Destination::Dashboard),
            "stores" => Ok(Destination::Stores),
            "users" => Ok(Destination::Users),
            "profile" => Ok(Destination::Profile),
            _ => Err(()),
        }
    }
}
