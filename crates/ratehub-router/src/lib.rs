//! Navigation-time authorization for RateHub.
//!
//! The route guard is a pure function of session store output: given the
//! current identity (or none) and a requested [`Destination`], the
//! [`RouteTable`] yields a [`RouteDecision`] on every navigation. It holds
//! no state of its own.
//!
//! # Example
//!
//! ```rust
//! use ratehub_router::{Destination, RouteDecision, RouteTable};
//!
//! let table = RouteTable::default();
//! assert_eq!(
//!     table.evaluate(None, Destination::Stores),
//!     RouteDecision::Redirect(Destination::Login),
//! );
//! ```

mod destination;
mod guard;

pub use destination::Destination;
pub use guard::{Access, RouteDecision, RouteTable};
