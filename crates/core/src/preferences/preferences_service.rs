use log::{debug, warn};
use std::sync::Arc;

use super::preferences_traits::PreferencesServiceTrait;
use crate::constants::MAX_PIN_ATTEMPTS;
use crate::errors::{Error, Result, ValidationError};
use crate::preferences::{Preferences, PreferencesUpdate};
use crate::state::StateContainer;

/// Service for the per-user settings bag.
pub struct PreferencesService {
    state: Arc<StateContainer>,
}

impl PreferencesService {
    pub fn new(state: Arc<StateContainer>) -> Self {
        Self { state }
    }
}

impl PreferencesServiceTrait for PreferencesService {
    fn get_preferences(&self) -> Preferences {
        self.state.preferences()
    }

    fn update_preferences(&self, update: &PreferencesUpdate) -> Result<Preferences> {
        self.state
            .update_preferences(|preferences| update.apply_to(preferences))
    }

    fn set_pin(&self, pin: &str) -> Result<()> {
        if pin.len() != 4 || !pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "PIN must be exactly 4 digits".to_string(),
            )));
        }
        self.state.update_preferences(|preferences| {
            preferences.pin = Some(pin.to_string());
            preferences.setup_complete = true;
            preferences.failed_pin_attempts = 0;
            preferences.blocked = false;
        })?;
        debug!("PIN configured");
        Ok(())
    }

    fn verify_pin(&self, pin: &str) -> Result<bool> {
        let preferences = self.state.preferences();
        if preferences.blocked {
            return Ok(false);
        }
        let Some(expected) = preferences.pin else {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "No PIN has been configured".to_string(),
            )));
        };

        if expected == pin {
            if preferences.failed_pin_attempts > 0 {
                self.state.update_preferences(|preferences| {
                    preferences.failed_pin_attempts = 0;
                })?;
            }
            return Ok(true);
        }

        let updated = self.state.update_preferences(|preferences| {
            preferences.failed_pin_attempts += 1;
            if preferences.failed_pin_attempts >= MAX_PIN_ATTEMPTS {
                preferences.blocked = true;
            }
        })?;
        if updated.blocked {
            warn!(
                "PIN entry blocked after {} failed attempts",
                updated.failed_pin_attempts
            );
        }
        Ok(false)
    }

    fn authorize_reset(&self) -> Result<()> {
        self.state.update_preferences(|preferences| {
            preferences.reset_authorized = true;
        })?;
        Ok(())
    }

    fn clear_pin(&self) -> Result<()> {
        let preferences = self.state.preferences();
        if !preferences.reset_authorized {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "PIN reset has not been authorized".to_string(),
            )));
        }
        self.state.update_preferences(|preferences| {
            preferences.pin = None;
            preferences.failed_pin_attempts = 0;
            preferences.blocked = false;
            preferences.reset_authorized = false;
        })?;
        debug!("PIN cleared");
        Ok(())
    }
}
