//! Domain models for the gateway.
//!
//! Shared wire types (identities, cart entries, catalog rows) live in
//! `schoolkit-core`; this module holds gateway-internal records.

pub mod session;

pub use session::Session;
