//! Notifications module - derived alerts raised by workflow operations.

mod notifications_model;
mod notifications_service;
mod notifications_traits;


pub use notifications_model::{Notification, Severity};
pub use notifications_service::NotificationService;
pub use notifications_traits::NotificationServiceTrait;
