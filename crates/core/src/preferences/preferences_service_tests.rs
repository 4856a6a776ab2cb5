#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::constants::{DEFAULT_GROUP_ID, MAX_PIN_ATTEMPTS};
    use crate::preferences::{PreferencesService, PreferencesServiceTrait, PreferencesUpdate};
    use crate::state::StateContainer;
    use crate::store::MemoryStore;
    use crate::users::User;

    fn setup() -> (Arc<StateContainer>, PreferencesService) {
        let state = Arc::new(StateContainer::load(Arc::new(MemoryStore::new())));
        let service = PreferencesService::new(state.clone());
        (state, service)
    }

    #[test]
    fn test_defaults_match_a_fresh_install() {
        let (_state, service) = setup();
        let preferences = service.get_preferences();
        assert_eq!(preferences.theme, "dark");
        assert_eq!(preferences.currency, "KES");
        assert!(preferences.pin.is_none());
        assert!(!preferences.setup_complete);
        assert!(preferences.dashboard_modules.show_target);
    }

    #[test]
    fn test_partial_update_leaves_the_rest_alone() {
        let (_state, service) = setup();
        let updated = service
            .update_preferences(&PreferencesUpdate {
                theme: Some("light".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.theme, "light");
        assert_eq!(updated.accent_color, "emerald");
        assert_eq!(updated.auto_lock_minutes, 5);
    }

    #[test]
    fn test_set_pin_requires_four_digits() {
        let (_state, service) = setup();
        assert!(service.set_pin("12a4").is_err());
        assert!(service.set_pin("123").is_err());
        assert!(service.set_pin("12345").is_err());

        service.set_pin("1234").unwrap();
        let preferences = service.get_preferences();
        assert_eq!(preferences.pin.as_deref(), Some("1234"));
        assert!(preferences.setup_complete);
    }

    #[test]
    fn test_verify_pin_without_one_configured_is_an_error() {
        let (_state, service) = setup();
        assert!(service.verify_pin("1234").is_err());
    }

    #[test]
    fn test_failed_attempts_block_at_the_threshold() {
        let (_state, service) = setup();
        service.set_pin("1234").unwrap();

        for _ in 0..MAX_PIN_ATTEMPTS {
            assert!(!service.verify_pin("0000").unwrap());
        }
        let preferences = service.get_preferences();
        assert!(preferences.blocked);

        // Even the correct PIN is refused once blocked.
        assert!(!service.verify_pin("1234").unwrap());
    }

    #[test]
    fn test_correct_entry_resets_the_counter() {
        let (_state, service) = setup();
        service.set_pin("1234").unwrap();

        assert!(!service.verify_pin("0000").unwrap());
        assert!(!service.verify_pin("1111").unwrap());
        assert!(service.verify_pin("1234").unwrap());
        assert_eq!(service.get_preferences().failed_pin_attempts, 0);
    }

    #[test]
    fn test_clear_pin_requires_authorization() {
        let (_state, service) = setup();
        service.set_pin("1234").unwrap();

        assert!(service.clear_pin().is_err());

        service.authorize_reset().unwrap();
        service.clear_pin().unwrap();
        let preferences = service.get_preferences();
        assert!(preferences.pin.is_none());
        assert!(!preferences.blocked);
        assert!(!preferences.reset_authorized);
    }

    #[test]
    fn test_updates_persist_only_while_logged_in() {
        let store = Arc::new(MemoryStore::new());
        let state = Arc::new(StateContainer::load(store.clone()));
        let service = PreferencesService::new(state.clone());

        // Anonymous edits live in memory only.
        service
            .update_preferences(&PreferencesUpdate {
                theme: Some("light".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(store.keys().iter().all(|k| !k.contains("prefs")));

        let bob = state
            .append_user(User::pending_member(
                "Bob",
                "bob@example.com",
                DEFAULT_GROUP_ID,
                "Chama Pool",
                2,
            ))
            .unwrap();
        state.set_session(DEFAULT_GROUP_ID, bob).unwrap();
        service
            .update_preferences(&PreferencesUpdate {
                theme: Some("light".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(store.keys().iter().any(|k| k.contains("prefs")));
    }
}
