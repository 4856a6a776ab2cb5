//! Messages module - direct member/admin chat and the assistant channel.

mod messages_model;
mod messages_service;
mod messages_traits;


pub use messages_model::{Message, MessageKind, NewMessage, ADMIN_RECIPIENT, AI_RECIPIENT};
pub use messages_service::MessageService;
pub use messages_traits::MessageServiceTrait;
