//! Group domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_CURRENCY, DEFAULT_GROUP_ADMIN_ID, DEFAULT_GROUP_ID, DEFAULT_GROUP_NAME};
use crate::errors::{Error, Result, ValidationError};

/// A savings group: one admin, any number of members, one shared target
/// and one shared ledger. Groups are created by the founding operation and
/// never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub currency: String,
    /// Pre-assigned id the founding admin logs in with.
    pub admin_id: String,
    pub created_at: DateTime<Utc>,
}

impl Group {
    /// Seed group used when the store holds no groups slice yet.
    pub fn seed() -> Self {
        Group {
            id: DEFAULT_GROUP_ID.to_string(),
            name: DEFAULT_GROUP_NAME.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            admin_id: DEFAULT_GROUP_ADMIN_ID.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Input model for founding a new group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGroup {
    pub name: String,
    pub admin_name: String,
    pub admin_email: String,
    pub currency: String,
}

impl NewGroup {
    /// Validates the founding input.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.admin_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "adminName".to_string(),
            )));
        }
        if self.admin_email.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "adminEmail".to_string(),
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "currency".to_string(),
            )));
        }
        Ok(())
    }

    /// Builds the group record. The id is a slug of the display name plus a
    /// short random suffix so two groups may share a name.
    pub fn into_group(self) -> Group {
        let suffix = Uuid::new_v4().simple().to_string();
        Group {
            id: format!("{}-{}", slugify(&self.name), &suffix[..6]),
            name: self.name,
            currency: self.currency,
            admin_id: format!("admin-{}", &suffix[6..14]),
            created_at: Utc::now(),
        }
    }
}

/// Lowercases and dash-joins a display name for use in a group id.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
