//! Shared type definitions.

pub mod id;
pub mod user;

pub use id::*;
pub use user::*;
