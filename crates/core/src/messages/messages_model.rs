//! Message domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::time_utils;

/// Conceptual address of the group admin in direct chat. Messages are
/// routed to this literal rather than to a specific admin user id.
pub const ADMIN_RECIPIENT: &str = "ADMIN";

/// Sender/recipient sentinel for the assistant channel.
pub const AI_RECIPIENT: &str = "AI";

/// Channel a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    #[default]
    Direct,
    Ai,
}

/// A chat message. Append-only except for the read flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    /// A user id, [`ADMIN_RECIPIENT`], or [`AI_RECIPIENT`].
    pub recipient_id: String,
    pub text: String,
    pub kind: MessageKind,
    /// Display label, not a machine timestamp.
    pub timestamp: String,
    pub is_read: bool,
}

/// Input model for sending a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub sender_id: String,
    pub sender_name: String,
    pub recipient_id: String,
    pub text: String,
    pub kind: MessageKind,
}

impl NewMessage {
    /// Builds the message record, stamping id, time label and unread flag.
    pub fn into_message(self) -> Message {
        Message {
            id: Uuid::new_v4().to_string(),
            sender_id: self.sender_id,
            sender_name: self.sender_name,
            recipient_id: self.recipient_id,
            text: self.text,
            kind: self.kind,
            timestamp: time_utils::now_label(),
            is_read: false,
        }
    }
}
