//! Announcement domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::time_utils;

/// A bulletin posted by the admin. Append-only and session-scoped, like
/// notifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Display label, not a machine timestamp.
    pub date: String,
    /// Author label shown in the bulletin, e.g. the admin's display name.
    pub author: String,
}

/// Input model for posting an announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl NewAnnouncement {
    pub fn into_announcement(self) -> Announcement {
        Announcement {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            content: self.content,
            date: time_utils::now_label(),
            author: self.author,
        }
    }
}
