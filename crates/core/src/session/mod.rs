//! Session module - login, logout, group founding and the inactivity lock.

mod idle_lock;
mod session_model;
mod session_service;
mod session_traits;


pub use idle_lock::IdleLock;
pub use session_model::LoginRequest;
pub use session_service::SessionService;
pub use session_traits::SessionServiceTrait;
