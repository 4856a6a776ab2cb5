use log::debug;
use std::sync::Arc;

use super::notifications_traits::NotificationServiceTrait;
use crate::errors::Result;
use crate::notifications::Notification;
use crate::state::StateContainer;

/// Service for reading and acknowledging notifications.
pub struct NotificationService {
    state: Arc<StateContainer>,
}

impl NotificationService {
    pub fn new(state: Arc<StateContainer>) -> Self {
        Self { state }
    }
}

impl NotificationServiceTrait for NotificationService {
    fn notifications_for(&self, user_id: &str) -> Vec<Notification> {
        self.state
            .notifications()
            .into_iter()
            .filter(|n| n.visible_to(user_id))
            .collect()
    }

    fn unread_count_for(&self, user_id: &str) -> usize {
        self.state
            .notifications()
            .iter()
            .filter(|n| n.visible_to(user_id) && !n.is_read)
            .count()
    }

    fn mark_notification_read(&self, notification_id: &str) -> Result<()> {
        let updated = self
            .state
            .modify_notification(notification_id, |notification| {
                notification.is_read = true;
            });
        if updated.is_none() {
            debug!(
                "Read receipt for unknown notification '{}' ignored",
                notification_id
            );
        }
        Ok(())
    }
}
