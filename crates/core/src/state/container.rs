//! The state container: exclusive owner of [`AppState`], write-through
//! mirror into the persisted store.
//!
//! All mutation goes through the named methods below; nothing outside this
//! type touches the collections directly. Every mutation of a persisted
//! slice re-serializes the whole slice synchronously - the store is a
//! passive mirror, the in-memory value always wins.

use std::sync::{Arc, RwLock};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::AppState;
use crate::announcements::{Announcement, NewAnnouncement};
use crate::constants::{
    preferences_key, KEY_ACTIVE_GROUP_ID, KEY_CURRENT_USER, KEY_GROUPS, KEY_MESSAGES, KEY_TARGET,
    KEY_TRANSACTIONS, KEY_USERS,
};
use crate::errors::{Result, StorageError};
use crate::groups::Group;
use crate::messages::Message;
use crate::notifications::Notification;
use crate::preferences::Preferences;
use crate::store::LocalStoreTrait;
use crate::target::SavingsTarget;
use crate::transactions::Transaction;
use crate::users::User;

pub struct StateContainer {
    state: RwLock<AppState>,
    store: Arc<dyn LocalStoreTrait>,
}

impl StateContainer {
    /// Hydrates the container from the store. Each slice falls back to the
    /// seed independently when absent or unreadable; preferences follow
    /// the restored session's user id.
    ///
    /// A seeded groups slice is written through immediately, so the seed
    /// group (including its generated `created_at`) survives a reload
    /// exactly like any other group.
    pub fn load(store: Arc<dyn LocalStoreTrait>) -> Self {
        let mut state = AppState::seed();

        match read_slice::<Vec<Group>>(store.as_ref(), KEY_GROUPS) {
            Some(groups) => state.groups = groups,
            None => write_slice(store.as_ref(), KEY_GROUPS, &state.groups),
        }
        if let Some(users) = read_slice::<Vec<User>>(store.as_ref(), KEY_USERS) {
            state.users = users;
        }
        if let Some(transactions) =
            read_slice::<Vec<Transaction>>(store.as_ref(), KEY_TRANSACTIONS)
        {
            state.transactions = transactions;
        }
        if let Some(messages) = read_slice::<Vec<Message>>(store.as_ref(), KEY_MESSAGES) {
            state.messages = messages;
        }
        state.target = read_slice::<SavingsTarget>(store.as_ref(), KEY_TARGET);

        // The active group id is stored as a plain string, not JSON.
        match store.get_item(KEY_ACTIVE_GROUP_ID) {
            Ok(id) => state.active_group_id = id,
            Err(e) => warn!("Failed to read '{}': {}", KEY_ACTIVE_GROUP_ID, e),
        }
        state.current_user = read_slice::<User>(store.as_ref(), KEY_CURRENT_USER);

        state.preferences = match &state.current_user {
            Some(user) => {
                read_slice::<Preferences>(store.as_ref(), &preferences_key(&user.id))
                    .unwrap_or_default()
            }
            None => Preferences::default(),
        };

        debug!(
            "State hydrated: {} groups, {} users, {} transactions, {} messages",
            state.groups.len(),
            state.users.len(),
            state.transactions.len(),
            state.messages.len()
        );

        StateContainer {
            state: RwLock::new(state),
            store,
        }
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(StorageError::from)?;
        self.store.set_item(key, &raw)
    }

    // === Groups ===

    pub fn groups(&self) -> Vec<Group> {
        self.state.read().unwrap().groups.clone()
    }

    pub fn find_group(&self, group_id: &str) -> Option<Group> {
        self.state
            .read()
            .unwrap()
            .groups
            .iter()
            .find(|g| g.id == group_id)
            .cloned()
    }

    pub fn append_group(&self, group: Group) -> Result<Group> {
        let mut state = self.state.write().unwrap();
        state.groups.push(group.clone());
        self.persist(KEY_GROUPS, &state.groups)?;
        Ok(group)
    }

    // === Users ===

    pub fn users(&self) -> Vec<User> {
        self.state.read().unwrap().users.clone()
    }

    pub fn append_user(&self, user: User) -> Result<User> {
        let mut state = self.state.write().unwrap();
        state.users.push(user.clone());
        self.persist(KEY_USERS, &state.users)?;
        Ok(user)
    }

    /// Applies `mutate` to the user with `user_id`, keeping the session's
    /// copy of that user in sync. Returns `None` when the id is unknown.
    pub fn modify_user(
        &self,
        user_id: &str,
        mutate: impl FnOnce(&mut User),
    ) -> Result<Option<User>> {
        let mut state = self.state.write().unwrap();
        let updated = match state.users.iter_mut().find(|u| u.id == user_id) {
            Some(user) => {
                mutate(user);
                user.clone()
            }
            None => return Ok(None),
        };
        self.persist(KEY_USERS, &state.users)?;
        if state
            .current_user
            .as_ref()
            .is_some_and(|u| u.id == user_id)
        {
            state.current_user = Some(updated.clone());
            self.persist(KEY_CURRENT_USER, &updated)?;
        }
        Ok(Some(updated))
    }

    pub fn remove_user(&self, user_id: &str) -> Result<()> {
        let mut state = self.state.write().unwrap();
        state.users.retain(|u| u.id != user_id);
        self.persist(KEY_USERS, &state.users)
    }

    /// Admin id of the group the given user belongs to, falling back to
    /// the active group. Used to address workflow notifications.
    pub fn admin_for(&self, user_id: &str) -> Option<String> {
        let state = self.state.read().unwrap();
        let group_id = state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .and_then(|u| u.group_id.clone())
            .or_else(|| state.active_group_id.clone())?;
        state
            .groups
            .iter()
            .find(|g| g.id == group_id)
            .map(|g| g.admin_id.clone())
    }

    // === Transactions ===

    pub fn transactions(&self) -> Vec<Transaction> {
        self.state.read().unwrap().transactions.clone()
    }

    pub fn append_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        let mut state = self.state.write().unwrap();
        state.transactions.push(transaction.clone());
        self.persist(KEY_TRANSACTIONS, &state.transactions)?;
        Ok(transaction)
    }

    /// Applies `mutate` to the transaction with `transaction_id`. Returns
    /// `None` when the id is unknown.
    pub fn modify_transaction(
        &self,
        transaction_id: &str,
        mutate: impl FnOnce(&mut Transaction),
    ) -> Result<Option<Transaction>> {
        let mut state = self.state.write().unwrap();
        let updated = match state
            .transactions
            .iter_mut()
            .find(|t| t.id == transaction_id)
        {
            Some(transaction) => {
                mutate(transaction);
                transaction.clone()
            }
            None => return Ok(None),
        };
        self.persist(KEY_TRANSACTIONS, &state.transactions)?;
        Ok(Some(updated))
    }

    pub fn remove_transaction(&self, transaction_id: &str) -> Result<()> {
        let mut state = self.state.write().unwrap();
        state.transactions.retain(|t| t.id != transaction_id);
        self.persist(KEY_TRANSACTIONS, &state.transactions)
    }

    // === Messages ===

    pub fn messages(&self) -> Vec<Message> {
        self.state.read().unwrap().messages.clone()
    }

    pub fn append_message(&self, message: Message) -> Result<Message> {
        let mut state = self.state.write().unwrap();
        state.messages.push(message.clone());
        self.persist(KEY_MESSAGES, &state.messages)?;
        Ok(message)
    }

    /// Flips the read flag on every message from `sender_id`. Returns how
    /// many messages were touched.
    pub fn mark_messages_from(&self, sender_id: &str) -> Result<usize> {
        let mut state = self.state.write().unwrap();
        let mut touched = 0;
        for message in state
            .messages
            .iter_mut()
            .filter(|m| m.sender_id == sender_id && !m.is_read)
        {
            message.is_read = true;
            touched += 1;
        }
        if touched > 0 {
            self.persist(KEY_MESSAGES, &state.messages)?;
        }
        Ok(touched)
    }

    // === Announcements (session-scoped) ===

    pub fn announcements(&self) -> Vec<Announcement> {
        self.state.read().unwrap().announcements.clone()
    }

    pub fn append_announcement(&self, new_announcement: NewAnnouncement) -> Announcement {
        let announcement = new_announcement.into_announcement();
        let mut state = self.state.write().unwrap();
        state.announcements.push(announcement.clone());
        announcement
    }

    // === Notifications (session-scoped) ===

    pub fn notifications(&self) -> Vec<Notification> {
        self.state.read().unwrap().notifications.clone()
    }

    pub fn push_notification(&self, notification: Notification) {
        let mut state = self.state.write().unwrap();
        state.notifications.push(notification);
    }

    /// Applies `mutate` to the notification with `notification_id`.
    /// Returns `None` when the id is unknown.
    pub fn modify_notification(
        &self,
        notification_id: &str,
        mutate: impl FnOnce(&mut Notification),
    ) -> Option<Notification> {
        let mut state = self.state.write().unwrap();
        state
            .notifications
            .iter_mut()
            .find(|n| n.id == notification_id)
            .map(|notification| {
                mutate(notification);
                notification.clone()
            })
    }

    // === Savings target ===

    pub fn target(&self) -> Option<SavingsTarget> {
        self.state.read().unwrap().target.clone()
    }

    pub fn set_target(&self, target: SavingsTarget) -> Result<SavingsTarget> {
        let mut state = self.state.write().unwrap();
        state.target = Some(target.clone());
        self.persist(KEY_TARGET, &target)?;
        Ok(target)
    }

    // === Session ===

    pub fn active_group_id(&self) -> Option<String> {
        self.state.read().unwrap().active_group_id.clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.read().unwrap().current_user.clone()
    }

    /// Opens a session: sets the active group and current user, then loads
    /// that user's preferences (or defaults when none are stored yet).
    pub fn set_session(&self, group_id: &str, user: User) -> Result<()> {
        let mut state = self.state.write().unwrap();
        state.active_group_id = Some(group_id.to_string());
        state.preferences =
            read_slice::<Preferences>(self.store.as_ref(), &preferences_key(&user.id))
                .unwrap_or_default();
        self.store.set_item(KEY_ACTIVE_GROUP_ID, group_id)?;
        self.persist(KEY_CURRENT_USER, &user)?;
        state.current_user = Some(user);
        Ok(())
    }

    /// Closes the session and resets preferences to defaults.
    pub fn clear_session(&self) -> Result<()> {
        let mut state = self.state.write().unwrap();
        state.active_group_id = None;
        state.current_user = None;
        state.preferences = Preferences::default();
        self.store.remove_item(KEY_ACTIVE_GROUP_ID)?;
        self.store.remove_item(KEY_CURRENT_USER)?;
        Ok(())
    }

    // === Preferences ===

    pub fn preferences(&self) -> Preferences {
        self.state.read().unwrap().preferences.clone()
    }

    /// Applies `mutate` to the preferences bag. The result is persisted
    /// under the current user's key, and only while a user is logged in.
    pub fn update_preferences(
        &self,
        mutate: impl FnOnce(&mut Preferences),
    ) -> Result<Preferences> {
        let mut state = self.state.write().unwrap();
        mutate(&mut state.preferences);
        if let Some(user) = &state.current_user {
            self.persist(&preferences_key(&user.id), &state.preferences)?;
        }
        Ok(state.preferences.clone())
    }
}

/// Reads and deserializes one slice. Absence and parse failures both yield
/// `None` so the caller falls back to the seed; a parse failure is logged
/// since it means the stored value is discarded.
fn write_slice<T: Serialize>(store: &dyn LocalStoreTrait, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Failed to serialize slice '{}': {}", key, e);
            return;
        }
    };
    if let Err(e) = store.set_item(key, &raw) {
        warn!("Failed to write slice '{}': {}", key, e);
    }
}

fn read_slice<T: DeserializeOwned>(store: &dyn LocalStoreTrait, key: &str) -> Option<T> {
    let raw = match store.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("Failed to read slice '{}': {}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Discarding unreadable slice '{}': {}", key, e);
            None
        }
    }
}
