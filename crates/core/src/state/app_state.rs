//! The in-memory application state.

use crate::announcements::Announcement;
use crate::groups::Group;
use crate::messages::Message;
use crate::notifications::Notification;
use crate::preferences::Preferences;
use crate::target::SavingsTarget;
use crate::transactions::Transaction;
use crate::users::User;

/// Every entity collection the application works with.
///
/// Groups, users, transactions, messages, the target and the session
/// fields are mirrored into the store on each mutation. Notifications and
/// announcements are session-scoped and never persisted.
#[derive(Debug, Clone)]
pub struct AppState {
    pub groups: Vec<Group>,
    pub users: Vec<User>,
    pub transactions: Vec<Transaction>,
    pub messages: Vec<Message>,
    pub announcements: Vec<Announcement>,
    pub notifications: Vec<Notification>,
    pub target: Option<SavingsTarget>,
    pub active_group_id: Option<String>,
    pub current_user: Option<User>,
    pub preferences: Preferences,
}

impl AppState {
    /// Fallback state used when the store is empty or unreadable: one
    /// default group, everything else empty.
    pub fn seed() -> Self {
        AppState {
            groups: vec![Group::seed()],
            users: Vec::new(),
            transactions: Vec::new(),
            messages: Vec::new(),
            announcements: Vec::new(),
            notifications: Vec::new(),
            target: None,
            active_group_id: None,
            current_user: None,
            preferences: Preferences::default(),
        }
    }
}
