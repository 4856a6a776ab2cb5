//! State module - the single authoritative in-memory holder of all entity
//! collections, mirrored synchronously into the persisted store.

mod app_state;
mod container;

#[cfg(test)]
mod container_tests;

pub use app_state::AppState;
pub use container::StateContainer;
