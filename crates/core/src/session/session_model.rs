//! Session domain models.

use serde::{Deserialize, Serialize};

use crate::groups::Group;
use crate::users::UserRole;

/// Input model for the login/membership resolution operation.
///
/// A bare sign-in carries neither `name` nor `group_override`; supplying a
/// name turns an unmatched login into an ingress request, and a group
/// override is used when the group was founded in the same call chain and
/// is not yet queryable by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub role: UserRole,
    pub group_id: String,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_override: Option<Group>,
}

impl LoginRequest {
    /// Bare sign-in against an existing identity.
    pub fn sign_in(email: impl Into<String>, role: UserRole, group_id: impl Into<String>) -> Self {
        LoginRequest {
            email: email.into(),
            role,
            group_id: group_id.into(),
            name: None,
            group_override: None,
        }
    }

    /// Sign-in that may register a new member under `name`.
    pub fn join(
        email: impl Into<String>,
        role: UserRole,
        group_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        LoginRequest {
            email: email.into(),
            role,
            group_id: group_id.into(),
            name: Some(name.into()),
            group_override: None,
        }
    }
}
