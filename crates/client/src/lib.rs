//! Encontro client library.
//!
//! The non-visual core of the Encontro event-registration app: everything the
//! screens consume, with the screens themselves left to the front end.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven application configuration
//! - [`auth`] - Authentication session manager and pluggable backends
//! - [`session`] - Durable key-value session persistence
//! - [`bootstrap`] - Version gate, update checker, and startup sequencer
//! - [`readiness`] - One-shot app-readiness gate over the bootstrap verdict
//! - [`api`] - Events, registrations, and accounts REST client
//!
//! # Startup flow
//!
//! [`readiness::AppReadinessGate`] runs once per process: it evaluates the
//! minimum-version gate, then the update check, and settles into a terminal
//! [`readiness::GateState`]. Only after the gate reports ready does the app
//! tree mount and start consuming [`auth::AuthSession`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod auth;
pub mod bootstrap;
pub mod config;
pub mod readiness;
pub mod session;

pub use api::EventsApi;
pub use auth::AuthSession;
pub use bootstrap::{BootstrapSequencer, BootstrapVerdict};
pub use config::AppConfig;
pub use readiness::{AppReadinessGate, GateState};
