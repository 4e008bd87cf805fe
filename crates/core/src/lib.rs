//! Encontro Core - Shared types library.
//!
//! This crate provides common types used across all Encontro components:
//! - `client` - Session, bootstrap, and API client library
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the user profile

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
