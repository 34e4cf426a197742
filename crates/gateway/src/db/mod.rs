//! In-memory data layer for the gateway.
//!
//! Everything lives in process memory and is lost on restart:
//!
//! - `users` - Immutable user registry (credentials + public identity)
//! - `sessions` - Live session table, token to user
//! - `carts` - Per-user cart entry lists
//! - `catalog` - Read-only schools, grades, classes, and equipment lists
//! - `mock` - Seed data loaded at startup
//!
//! The session and cart stores are the only shared mutable state. Both wrap a
//! concurrent `moka` cache and expose only their narrow contracts, never the
//! underlying container.

pub mod carts;
pub mod catalog;
pub mod mock;
pub mod sessions;
pub mod users;

pub use carts::CartStore;
pub use catalog::Catalog;
pub use sessions::SessionStore;
pub use users::{UserRecord, UserRegistry};
