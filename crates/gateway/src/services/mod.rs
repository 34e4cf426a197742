//! Business logic services for the gateway.
//!
//! # Services
//!
//! - `auth` - Credential verification, session issuance, and the authorization gate

pub mod auth;
