//! File-backed storage implementation for Pamoja.
//!
//! This crate provides the on-disk backend for the state container. It
//! implements the `LocalStoreTrait` defined in `pamoja-core` as a single
//! JSON document of string keys and string values, rewritten in full on
//! every mutation. That mirrors the write pattern the container expects:
//! a completed `set_item` means the value is durable.
//!
//! # Architecture
//!
//! This crate is the only place in the application that touches the
//! filesystem. Everything else works with the store trait.
//!
//! ```text
//!          core (domain)
//!                │
//!                ▼
//!     storage-local (this crate)
//!                │
//!                ▼
//!           store.json
//! ```

mod file_store;

pub use file_store::FileStore;

// Re-export from pamoja-core for convenience
pub use pamoja_core::errors::{Error, Result, StorageError};
pub use pamoja_core::store::LocalStoreTrait;
