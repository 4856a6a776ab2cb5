use crate::errors::Result;
use crate::notifications::Notification;

/// Trait for reading and acknowledging notifications.
///
/// Creation has no entry point here: notifications exist only as side
/// effects of other workflow operations.
pub trait NotificationServiceTrait: Send + Sync {
    /// Notifications visible to a member: broadcasts plus those addressed
    /// to them.
    fn notifications_for(&self, user_id: &str) -> Vec<Notification>;

    fn unread_count_for(&self, user_id: &str) -> usize;

    /// Flips the read flag. Idempotent; silently no-ops on an unknown id.
    /// There is no bulk-read operation.
    fn mark_notification_read(&self, notification_id: &str) -> Result<()>;
}
