use log::debug;
use std::sync::Arc;

use crate::announcements::{Announcement, NewAnnouncement};
use crate::errors::Result;
use crate::notifications::{Notification, Severity};
use crate::state::StateContainer;

/// Trait for the admin bulletin board.
pub trait AnnouncementServiceTrait: Send + Sync {
    fn get_announcements(&self) -> Vec<Announcement>;

    /// Appends a bulletin and raises a matching broadcast notification.
    fn post_announcement(&self, new_announcement: NewAnnouncement) -> Result<Announcement>;
}

/// Service for the admin bulletin board.
pub struct AnnouncementService {
    state: Arc<StateContainer>,
}

impl AnnouncementService {
    pub fn new(state: Arc<StateContainer>) -> Self {
        Self { state }
    }
}

impl AnnouncementServiceTrait for AnnouncementService {
    fn get_announcements(&self) -> Vec<Announcement> {
        self.state.announcements()
    }

    fn post_announcement(&self, new_announcement: NewAnnouncement) -> Result<Announcement> {
        let announcement = self.state.append_announcement(new_announcement);
        debug!("Announcement '{}' posted", announcement.title);
        self.state.push_notification(Notification::broadcast(
            Severity::Info,
            announcement.title.clone(),
            announcement.content.clone(),
        ));
        Ok(announcement)
    }
}
