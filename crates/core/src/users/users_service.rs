use log::debug;
use std::sync::Arc;

use super::users_traits::UserServiceTrait;
use crate::errors::Result;
use crate::notifications::{Notification, Severity};
use crate::state::StateContainer;
use crate::users::{User, UserStatus, UserUpdate};

/// Service for member administration.
pub struct UserService {
    state: Arc<StateContainer>,
}

impl UserService {
    pub fn new(state: Arc<StateContainer>) -> Self {
        Self { state }
    }
}

impl UserServiceTrait for UserService {
    fn get_users(&self) -> Vec<User> {
        self.state.users()
    }

    fn get_group_members(&self, group_id: &str) -> Vec<User> {
        let mut members: Vec<User> = self
            .state
            .users()
            .into_iter()
            .filter(|u| u.group_id.as_deref() == Some(group_id))
            .collect();
        members.sort_by_key(|u| u.rank);
        members
    }

    fn update_user_status(&self, user_id: &str, status: UserStatus) -> Result<()> {
        let updated = self.state.modify_user(user_id, |user| {
            user.status = status;
        })?;

        let Some(user) = updated else {
            debug!("Status update for unknown user '{}' ignored", user_id);
            return Ok(());
        };

        let group_name = user.group_name.clone().unwrap_or_default();
        match status {
            UserStatus::Active => self.state.push_notification(Notification::direct(
                &user.id,
                Severity::Success,
                "Membership approved",
                format!("Welcome to {}! Your membership is now active.", group_name),
            )),
            UserStatus::Deactivated => self.state.push_notification(Notification::direct(
                &user.id,
                Severity::Warning,
                "Membership deactivated",
                format!("Your membership in {} has been deactivated.", group_name),
            )),
            UserStatus::Pending => {}
        }
        Ok(())
    }

    fn update_user(&self, user_id: &str, update: UserUpdate) -> Result<Option<User>> {
        self.state.modify_user(user_id, |user| update.apply_to(user))
    }

    fn delete_user(&self, user_id: &str) -> Result<()> {
        self.state.remove_user(user_id)
    }
}
