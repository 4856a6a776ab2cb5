//! User domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user inside a group. Exactly one ADMIN exists per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

/// Membership lifecycle status.
///
/// New members enter as `Pending` (an ingress request) and are moved to
/// `Active` or `Deactivated` by the group admin. Nothing archives users
/// automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    #[default]
    Pending,
    Deactivated,
}

/// Domain model representing a group member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    /// Ordinal position within the group; new members get max+1.
    pub rank: i32,
    pub group_id: Option<String>,
    pub group_name: Option<String>,
    /// Cumulative approved contribution, denormalized for display.
    pub contributed: Decimal,
    pub avatar_url: Option<String>,
    /// Only used to select a placeholder avatar.
    pub gender: Option<String>,
}

impl User {
    /// Builds the founding admin for a group: pre-assigned id, immediately
    /// active.
    pub fn founding_admin(
        admin_id: &str,
        name: &str,
        email: &str,
        group_id: &str,
        group_name: &str,
    ) -> Self {
        User {
            id: admin_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
            rank: 1,
            group_id: Some(group_id.to_string()),
            group_name: Some(group_name.to_string()),
            contributed: Decimal::ZERO,
            avatar_url: None,
            gender: None,
        }
    }

    /// Builds a new member requesting ingress: fresh id, pending status.
    pub fn pending_member(
        name: &str,
        email: &str,
        group_id: &str,
        group_name: &str,
        rank: i32,
    ) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: UserRole::User,
            status: UserStatus::Pending,
            rank,
            group_id: Some(group_id.to_string()),
            group_name: Some(group_name.to_string()),
            contributed: Decimal::ZERO,
            avatar_url: None,
            gender: None,
        }
    }
}

/// Merge-patch input for profile updates. `None` fields are left as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub gender: Option<String>,
    pub contributed: Option<Decimal>,
}

impl UserUpdate {
    /// Applies the patch to a user record.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(avatar_url) = &self.avatar_url {
            user.avatar_url = Some(avatar_url.clone());
        }
        if let Some(gender) = &self.gender {
            user.gender = Some(gender.clone());
        }
        if let Some(contributed) = self.contributed {
            user.contributed = contributed;
        }
    }
}
