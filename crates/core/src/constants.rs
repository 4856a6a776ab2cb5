/// Namespace prefix for every persisted key.
pub const STORE_PREFIX: &str = "chamaPool";

/// Persisted slice keys.
pub const KEY_GROUPS: &str = "chamaPool_groups";
pub const KEY_USERS: &str = "chamaPool_users";
pub const KEY_TRANSACTIONS: &str = "chamaPool_transactions";
pub const KEY_MESSAGES: &str = "chamaPool_messages";
pub const KEY_TARGET: &str = "chamaPool_target";
pub const KEY_ACTIVE_GROUP_ID: &str = "chamaPool_activeGroupId";
pub const KEY_CURRENT_USER: &str = "chamaPool_currentUser";

/// Preferences are stored per user, keyed by the user's id.
pub fn preferences_key(user_id: &str) -> String {
    format!("{}_prefs_{}", STORE_PREFIX, user_id)
}

/// Seed group used when no persisted state exists yet.
pub const DEFAULT_GROUP_ID: &str = "chama-pool";
pub const DEFAULT_GROUP_NAME: &str = "Chama Pool";
pub const DEFAULT_GROUP_ADMIN_ID: &str = "admin-chama-pool";
pub const DEFAULT_CURRENCY: &str = "KES";

/// Wrong PIN entries tolerated before the preferences bag is blocked.
pub const MAX_PIN_ATTEMPTS: u32 = 5;
