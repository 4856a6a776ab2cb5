use crate::errors::Result;
use crate::groups::{Group, NewGroup};
use crate::session::LoginRequest;
use crate::users::User;

/// Trait for session and membership operations.
pub trait SessionServiceTrait: Send + Sync {
    /// Resolves (or registers) a member and opens a session. Fails with
    /// [`crate::Error::MemberNotFound`] when the identity is unknown and
    /// no registration context was supplied.
    fn login(&self, request: LoginRequest) -> Result<User>;

    /// Closes the session; preferences reset to defaults.
    fn logout(&self) -> Result<()>;

    /// Creates a group and its admin user, returning the group for an
    /// immediate chained login.
    fn found_group(&self, new_group: NewGroup) -> Result<Group>;

    fn current_user(&self) -> Option<User>;

    fn active_group(&self) -> Option<Group>;
}
