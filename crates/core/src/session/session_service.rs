use log::debug;
use std::sync::Arc;

use super::session_traits::SessionServiceTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::groups::{Group, NewGroup};
use crate::notifications::{Notification, Severity};
use crate::session::LoginRequest;
use crate::state::StateContainer;
use crate::users::{User, UserRole};

/// Service for session and membership operations.
pub struct SessionService {
    state: Arc<StateContainer>,
}

impl SessionService {
    pub fn new(state: Arc<StateContainer>) -> Self {
        Self { state }
    }

    fn next_rank(&self, group_id: &str) -> i32 {
        self.state
            .users()
            .iter()
            .filter(|u| u.group_id.as_deref() == Some(group_id))
            .map(|u| u.rank)
            .max()
            .unwrap_or(0)
            + 1
    }
}

impl SessionServiceTrait for SessionService {
    fn login(&self, request: LoginRequest) -> Result<User> {
        let has_registration_context =
            request.name.is_some() || request.group_override.is_some();

        let group = match request.group_override.clone() {
            Some(group) => group,
            None => self.state.find_group(&request.group_id).ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown group '{}'",
                    request.group_id
                )))
            })?,
        };

        let existing = self.state.users().into_iter().find(|u| {
            u.email.eq_ignore_ascii_case(&request.email)
                && u.group_id.as_deref() == Some(group.id.as_str())
        });

        let user = match existing {
            Some(user) => user,
            None if !has_registration_context => {
                return Err(Error::MemberNotFound {
                    email: request.email,
                    group_id: group.id,
                });
            }
            None => {
                let name = request
                    .name
                    .clone()
                    .unwrap_or_else(|| request.email.clone());
                match request.role {
                    UserRole::Admin => {
                        // The founding admin logs in under the group's
                        // pre-assigned admin id and is immediately active.
                        let admin = User::founding_admin(
                            &group.admin_id,
                            &name,
                            &request.email,
                            &group.id,
                            &group.name,
                        );
                        self.state.append_user(admin)?
                    }
                    UserRole::User => {
                        let rank = self.next_rank(&group.id);
                        let member = User::pending_member(
                            &name,
                            &request.email,
                            &group.id,
                            &group.name,
                            rank,
                        );
                        let member = self.state.append_user(member)?;
                        self.state.push_notification(Notification::direct(
                            &group.admin_id,
                            Severity::Info,
                            "New membership request",
                            format!("{} has asked to join {}", member.name, group.name),
                        ));
                        member
                    }
                }
            }
        };

        debug!("Opening session for '{}' in group '{}'", user.email, group.id);
        self.state.set_session(&group.id, user.clone())?;
        Ok(user)
    }

    fn logout(&self) -> Result<()> {
        debug!("Closing session");
        self.state.clear_session()
    }

    fn found_group(&self, new_group: NewGroup) -> Result<Group> {
        new_group.validate()?;
        let group = self.state.append_group(new_group.clone().into_group())?;
        let admin = User::founding_admin(
            &group.admin_id,
            &new_group.admin_name,
            &new_group.admin_email,
            &group.id,
            &group.name,
        );
        self.state.append_user(admin)?;
        debug!("Founded group '{}' ({})", group.name, group.id);
        Ok(group)
    }

    fn current_user(&self) -> Option<User> {
        self.state.current_user()
    }

    fn active_group(&self) -> Option<Group> {
        self.state
            .active_group_id()
            .and_then(|id| self.state.find_group(&id))
    }
}
