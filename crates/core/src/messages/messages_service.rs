use log::debug;
use std::sync::Arc;

use super::messages_traits::MessageServiceTrait;
use crate::errors::Result;
use crate::messages::{Message, MessageKind, NewMessage, ADMIN_RECIPIENT};
use crate::notifications::{Notification, Severity};
use crate::state::StateContainer;

/// Service for the direct and assistant chat channels.
pub struct MessageService {
    state: Arc<StateContainer>,
}

impl MessageService {
    pub fn new(state: Arc<StateContainer>) -> Self {
        Self { state }
    }
}

impl MessageServiceTrait for MessageService {
    fn get_messages(&self) -> Vec<Message> {
        self.state.messages()
    }

    fn conversation(&self, a: &str, b: &str) -> Vec<Message> {
        self.state
            .messages()
            .into_iter()
            .filter(|m| {
                (m.sender_id == a && m.recipient_id == b)
                    || (m.sender_id == b && m.recipient_id == a)
            })
            .collect()
    }

    fn send_message(&self, new_message: NewMessage) -> Result<Message> {
        let message = self.state.append_message(new_message.into_message())?;
        debug!(
            "Message {} from '{}' to '{}'",
            message.id, message.sender_id, message.recipient_id
        );

        if message.kind == MessageKind::Direct && message.recipient_id == ADMIN_RECIPIENT {
            if let Some(admin_id) = self.state.admin_for(&message.sender_id) {
                self.state.push_notification(Notification::direct(
                    admin_id,
                    Severity::Info,
                    "New message",
                    format!("{} sent you a message.", message.sender_name),
                ));
            }
        }
        Ok(message)
    }

    fn mark_messages_read(&self, sender_id: &str) -> Result<usize> {
        self.state.mark_messages_from(sender_id)
    }
}
