//! Target module - the group's shared savings goal and its edit lock.

mod target_model;
mod target_service;
mod target_traits;


pub use target_model::{SavingsTarget, TargetUpdate, EDIT_COOLDOWN_MS};
pub use target_service::TargetService;
pub use target_traits::TargetServiceTrait;
