//! Preferences module - the per-user settings bag and PIN lock workflow.

mod preferences_model;
mod preferences_service;
mod preferences_traits;

#[cfg(test)]
mod preferences_service_tests;

pub use preferences_model::{DashboardModules, Preferences, PreferencesUpdate};
pub use preferences_service::PreferencesService;
pub use preferences_traits::PreferencesServiceTrait;
