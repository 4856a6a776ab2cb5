use crate::errors::Result;
use crate::preferences::{Preferences, PreferencesUpdate};

/// Trait for the per-user settings bag and the PIN lock workflow.
pub trait PreferencesServiceTrait: Send + Sync {
    fn get_preferences(&self) -> Preferences;

    /// Merge-patch of the appearance and behavior settings.
    fn update_preferences(&self, update: &PreferencesUpdate) -> Result<Preferences>;

    /// Configures a 4-digit PIN and marks setup complete.
    fn set_pin(&self, pin: &str) -> Result<()>;

    /// Checks a PIN entry. A wrong entry increments the failed counter and
    /// blocks the bag at the attempt limit; a correct entry resets the
    /// counter. Always `Ok(false)` while blocked.
    fn verify_pin(&self, pin: &str) -> Result<bool>;

    /// Flags that a PIN reset has been approved out of band.
    fn authorize_reset(&self) -> Result<()>;

    /// Clears the PIN and all lock counters. Requires a prior
    /// `authorize_reset`.
    fn clear_pin(&self) -> Result<()>;
}
