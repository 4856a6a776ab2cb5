use crate::errors::Result;
use crate::messages::{Message, NewMessage};

/// Trait for chat operations.
pub trait MessageServiceTrait: Send + Sync {
    fn get_messages(&self) -> Vec<Message>;

    /// Messages exchanged between two addresses, in insertion order.
    fn conversation(&self, a: &str, b: &str) -> Vec<Message>;

    /// Appends a message stamped with a fresh id, a time label and
    /// `is_read: false`. A direct message to the admin sentinel also
    /// raises a notification for the group admin.
    fn send_message(&self, new_message: NewMessage) -> Result<Message>;

    /// Coarse acknowledgment: flips the read flag on every message from
    /// one sender. Returns how many were flipped.
    fn mark_messages_read(&self, sender_id: &str) -> Result<usize>;
}
