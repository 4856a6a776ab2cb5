//! Notification domain models.
//!
//! Notifications are produced only as side effects of other operations
//! (ingress requests, ledger decisions, target changes, announcements).
//! There is no standalone "create notification" action.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::time_utils;

/// Severity tag controlling how a notification is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// An alert addressed to one member, or to the whole group when
/// `recipient_id` is absent.
///
/// A broadcast record carries a single shared read flag: marking it read
/// marks it read for everyone. Session-scoped; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    /// Display label, not a machine timestamp.
    pub date: String,
    pub is_read: bool,
    /// Absent means broadcast to every member.
    pub recipient_id: Option<String>,
}

impl Notification {
    /// Builds a notification addressed to one member.
    pub fn direct(
        recipient_id: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Notification {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            message: message.into(),
            severity,
            date: time_utils::now_label(),
            is_read: false,
            recipient_id: Some(recipient_id.into()),
        }
    }

    /// Builds a broadcast visible to every member.
    pub fn broadcast(
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Notification {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            message: message.into(),
            severity,
            date: time_utils::now_label(),
            is_read: false,
            recipient_id: None,
        }
    }

    /// Visibility filter: broadcasts are visible to everyone, addressed
    /// notifications only to their recipient.
    pub fn visible_to(&self, user_id: &str) -> bool {
        match &self.recipient_id {
            None => true,
            Some(recipient) => recipient == user_id,
        }
    }
}
