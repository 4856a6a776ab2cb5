use crate::errors::Result;
use crate::users::{User, UserStatus, UserUpdate};

/// Trait for member administration operations.
pub trait UserServiceTrait: Send + Sync {
    fn get_users(&self) -> Vec<User>;

    /// Members of one group, ordered by rank.
    fn get_group_members(&self, group_id: &str) -> Vec<User>;

    /// Admission decision. Silently no-ops on an unknown id; an ACTIVE
    /// transition notifies the member with success severity, a DEACTIVATED
    /// one with warning severity.
    fn update_user_status(&self, user_id: &str, status: UserStatus) -> Result<()>;

    /// Merge-patch profile edit with no notification side effect.
    fn update_user(&self, user_id: &str, update: UserUpdate) -> Result<Option<User>>;

    /// Unconditional removal; no audit trail is kept.
    fn delete_user(&self, user_id: &str) -> Result<()>;
}
