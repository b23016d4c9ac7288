//! Session store for RateHub.
//!
//! Provides authentication against a seedable identity directory and
//! durable session persistence through an injected key-value repository.

mod directory;
mod error;
mod session;
mod token;

pub use directory::{IdentityDirectory, IdentityRecord};
pub use error::AuthError;
pub use session::{NewIdentity, PasswordChange, SessionStore, TOKEN_KEY, USER_KEY};
pub use token::AuthToken;
