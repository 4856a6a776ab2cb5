//! Preferences domain models.

use serde::{Deserialize, Serialize};

/// Visibility flags for the dashboard modules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardModules {
    pub show_target: bool,
    pub show_ledger: bool,
    pub show_members: bool,
    pub show_analytics: bool,
    pub show_announcements: bool,
}

impl Default for DashboardModules {
    fn default() -> Self {
        DashboardModules {
            show_target: true,
            show_ledger: true,
            show_members: true,
            show_analytics: true,
            show_announcements: true,
        }
    }
}

/// Per-user settings bag.
///
/// Loaded from the user's own storage key when a session starts and reset
/// to defaults on logout. Persisted on every change, but only while a user
/// is logged in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub theme: String,
    pub accent_color: String,
    pub font_size: String,
    pub currency: String,
    pub timezone: String,
    /// Display name override for the group header.
    pub group_display_name: Option<String>,
    pub app_version: String,
    /// Numeric PIN guarding the locked screen; absent until set up.
    pub pin: Option<String>,
    /// Inactivity minutes before the app locks itself; 0 disables the
    /// timer.
    pub auto_lock_minutes: u32,
    pub lock_on_blur: bool,
    pub setup_complete: bool,
    pub failed_pin_attempts: u32,
    /// Set when the attempt limit is exceeded; only a reset clears it.
    pub blocked: bool,
    pub reset_authorized: bool,
    pub dashboard_modules: DashboardModules,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            theme: "dark".to_string(),
            accent_color: "emerald".to_string(),
            font_size: "medium".to_string(),
            currency: crate::constants::DEFAULT_CURRENCY.to_string(),
            timezone: "Africa/Nairobi".to_string(),
            group_display_name: None,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            pin: None,
            auto_lock_minutes: 5,
            lock_on_blur: false,
            setup_complete: false,
            failed_pin_attempts: 0,
            blocked: false,
            reset_authorized: false,
            dashboard_modules: DashboardModules::default(),
        }
    }
}

/// Merge-patch input for the appearance and behavior settings. PIN state
/// changes go through the dedicated PIN operations instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub theme: Option<String>,
    pub accent_color: Option<String>,
    pub font_size: Option<String>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub group_display_name: Option<String>,
    pub auto_lock_minutes: Option<u32>,
    pub lock_on_blur: Option<bool>,
    pub dashboard_modules: Option<DashboardModules>,
}

impl PreferencesUpdate {
    /// Applies the patch to a preferences bag.
    pub fn apply_to(&self, preferences: &mut Preferences) {
        if let Some(theme) = &self.theme {
            preferences.theme = theme.clone();
        }
        if let Some(accent_color) = &self.accent_color {
            preferences.accent_color = accent_color.clone();
        }
        if let Some(font_size) = &self.font_size {
            preferences.font_size = font_size.clone();
        }
        if let Some(currency) = &self.currency {
            preferences.currency = currency.clone();
        }
        if let Some(timezone) = &self.timezone {
            preferences.timezone = timezone.clone();
        }
        if let Some(group_display_name) = &self.group_display_name {
            preferences.group_display_name = Some(group_display_name.clone());
        }
        if let Some(auto_lock_minutes) = self.auto_lock_minutes {
            preferences.auto_lock_minutes = auto_lock_minutes;
        }
        if let Some(lock_on_blur) = self.lock_on_blur {
            preferences.lock_on_blur = lock_on_blur;
        }
        if let Some(dashboard_modules) = &self.dashboard_modules {
            preferences.dashboard_modules = dashboard_modules.clone();
        }
    }
}
