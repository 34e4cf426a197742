//! SchoolKit Core - Shared types library.
//!
//! This crate provides the domain types used by the gateway and its tests:
//! identities, session tokens, catalog rows, and cart entries.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no shared state, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, catalog rows, cart entries, identities, and tokens

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
