//! Persisted store abstraction - key-value mirror of the in-memory state.

mod memory_store;
mod store_traits;

pub use memory_store::MemoryStore;
pub use store_traits::LocalStoreTrait;
