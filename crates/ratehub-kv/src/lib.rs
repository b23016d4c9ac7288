//! Key-value session repository for RateHub.
//!
//! The session store persists its state through an explicitly injected
//! [`KeyValueStore`] rather than any ambient global, so consumers choose
//! the backend and tests substitute doubles:
//!
//! - [`MemoryStore`] - in-process map, the test double and default
//! - [`FileStore`] - one JSON file on disk, the durable backend
//!   used by the CLI
//!
//! # Example
//!
//! ```rust
//! use ratehub_kv::{KeyValueStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set("auth_token", "tok_abc").unwrap();
//! assert_eq!(store.get("auth_token").unwrap().as_deref(), Some("tok_abc"));
//! store.remove("auth_token").unwrap();
//! assert_eq!(store.get("auth_token").unwrap(), None);
//! ```

mod error;
mod file;
mod kv;

pub use error::StorageError;
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
