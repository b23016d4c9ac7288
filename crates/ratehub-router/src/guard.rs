//! The route guard: an explicit destination-to-policy table and the pure
//! decision function evaluated on every navigation.

use crate::Destination;
use ratehub_core::{Identity, Role};

/// Access policy for a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Only reachable while signed out (sign-in, registration).
    PublicOnly,
    /// Requires authentication. An empty role set means any authenticated
    /// identity; a non-empty set restricts to those roles.
    Protected(Vec<Role>),
}

impl Access {
    /// Any authenticated identity.
    pub fn authenticated() -> Self {
        Access::Protected(Vec::new())
    }

    /// A single required role.
    pub fn role(role: Role) -> Self {
        Access::Protected(vec![role])
    }
}

/// Outcome of a navigation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested destination.
    Allow,
    /// Navigate elsewhere instead.
    Redirect(Destination),
}

impl RouteDecision {
    /// Whether the destination may render.
    pub fn is_allowed(&self) -> bool {
        matches!(self, RouteDecision::Allow)
    }

    /// The redirect target, if any.
    pub fn redirect_to(&self) -> Option<Destination> {
        match self {
            RouteDecision::Allow => None,
            RouteDecision::Redirect(dest) => Some(*dest),
        }
    }
}

/// The destination-to-policy table.
///
/// One table describes the whole application, replacing per-page guard
/// conditionals. The default table matches the platform's pages: sign-in
/// and registration are public-only, user administration is admin-only,
/// and everything else admits any authenticated identity.
#[derive(Debug, Clone)]
pub struct RouteTable {
    rules: Vec<(Destination, Access)>,
    sign_in: Destination,
    home: Destination,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            rules: vec![
                (Destination::Login, Access::PublicOnly),
                (Destination::Register, Access::PublicOnly),
                (Destination::Dashboard, Access::authenticated()),
                (Destination::Stores, Access::authenticated()),
                (Destination::Users, Access::role(Role::Admin)),
                (Destination::Profile, Access::authenticated()),
            ],
            sign_in: Destination::Login,
            home: Destination::Dashboard,
        }
    }
}

impl RouteTable {
    /// The default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the policy for a destination.
    pub fn with_rule(mut self, destination: Destination, access: Access) -> Self {
        match self.rules.iter_mut().find(|(d, _)| *d == destination) {
            Some(rule) => rule.1 = access,
            None => self.rules.push((destination, access)),
        }
        self
    }

    /// The policy for a destination. Destinations missing from the table
    /// default to any-authenticated, the safe direction for new pages.
    pub fn access(&self, destination: Destination) -> Access {
        self.rules
            .iter()
            .find(|(d, _)| *d == destination)
            .map(|(_, access)| access.clone())
            .unwrap_or_else(Access::authenticated)
    }

    /// The sign-in destination unauthenticated requests redirect to.
    pub fn sign_in(&self) -> Destination {
        self.sign_in
    }

    /// The default destination for authenticated identities.
    pub fn home(&self) -> Destination {
        self.home
    }

    /// Decide a navigation. Pure and synchronous; call on every
    /// navigation event with the session store's current identity.
    pub fn evaluate(&self, identity: Option<&Identity>, destination: Destination) -> RouteDecision {
        match self.access(destination) {
            Access::PublicOnly => match identity {
                // Already signed in: never show sign-in/registration again.
                Some(_) => RouteDecision::Redirect(self.home),
                None => RouteDecision::Allow,
            },
            Access::Protected(required) => match identity {
                None => RouteDecision::Redirect(self.sign_in),
                Some(identity) if !required.is_empty() && !required.contains(&identity.role) => {
                    // Authenticated but unauthorized: back home, not to sign-in.
                    RouteDecision::Redirect(self.home)
                }
                Some(_) => RouteDecision::Allow,
            },
        }
    }
}
