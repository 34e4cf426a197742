//! Core types for SchoolKit.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod catalog;
pub mod id;
pub mod identity;
pub mod token;

pub use cart::CartEntry;
pub use catalog::{Class, EquipmentItem, Grade, School};
pub use id::*;
pub use identity::Identity;
pub use token::{SESSION_TOKEN_ALPHABET, SESSION_TOKEN_LENGTH, SessionToken, SessionTokenError};
