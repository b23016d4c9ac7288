//! Domain types for the RateHub store-rating platform.
//!
//! This crate provides the data model shared by the session store, the
//! route guard, and any presentation surface:
//!
//! - **Identity**: the authenticated actor record and its [`Role`]
//! - **Store / Rating**: rated stores with 1-5 star ratings
//! - **Validation**: registration input preconditions
//!
//! # Example
//!
//! ```rust
//! use ratehub_core::prelude::*;
//!
//! let mut store = Store::new(StoreId::new("1"), "Grocery Mart", "contact@grocerymart.com", "123 Market Street");
//! store.rate(Rating::today(UserId::new("user-1"), RatingValue::new(4).unwrap()));
//! assert_eq!(store.average_rating(), Some(4.0));
//! ```

pub mod error;
pub mod identity;
pub mod ids;
pub mod store;
pub mod validate;

pub use error::DomainError;
pub use identity::{Identity, Role};
pub use ids::{StoreId, UserId};
pub use store::{Rating, RatingValue, Statistics, Store};
pub use validate::{validate_registration, Registration, ValidationError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::DomainError;
    pub use crate::identity::{Identity, Role};
    pub use crate::ids::{StoreId, UserId};
    pub use crate::store::{Rating, RatingValue, Statistics, Store};
    pub use crate::validate::{validate_registration, Registration, ValidationError};
}
