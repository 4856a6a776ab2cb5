//! Pamoja Core - domain entities, services, and traits.
//!
//! This crate contains the core business logic for the Pamoja
//! group-savings tracker. It is storage-agnostic: the state container
//! mirrors itself into a [`store::LocalStoreTrait`] implemented by the
//! `pamoja-storage-local` crate.

pub mod announcements;
pub mod constants;
pub mod errors;
pub mod groups;
pub mod messages;
pub mod notifications;
pub mod payments;
pub mod preferences;
pub mod reports;
pub mod session;
pub mod state;
pub mod store;
pub mod target;
pub mod transactions;
pub mod users;
pub mod utils;

// Re-export the state container and error types
pub use errors::Error;
pub use errors::Result;
pub use state::StateContainer;
