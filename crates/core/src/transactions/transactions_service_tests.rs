#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use crate::constants::{DEFAULT_GROUP_ADMIN_ID, DEFAULT_GROUP_ID};
    use crate::notifications::Severity;
    use crate::state::StateContainer;
    use crate::store::MemoryStore;
    use crate::transactions::{
        NewTransaction, TransactionService, TransactionServiceTrait, TransactionStatus,
        TransactionUpdate,
    };
    use crate::users::User;

    fn setup() -> (Arc<StateContainer>, TransactionService, User) {
        let state = Arc::new(StateContainer::load(Arc::new(MemoryStore::new())));
        let bob = state
            .append_user(User::pending_member(
                "Bob",
                "bob@example.com",
                DEFAULT_GROUP_ID,
                "Chama Pool",
                2,
            ))
            .unwrap();
        let service = TransactionService::new(state.clone());
        (state, service, bob)
    }

    fn deposit(bob: &User, amount: Decimal) -> NewTransaction {
        NewTransaction {
            user_id: bob.id.clone(),
            user_name: bob.name.clone(),
            amount,
            currency: "KES".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            description: "Monthly deposit".to_string(),
            account_number: None,
            source_text: None,
        }
    }

    #[test]
    fn test_submission_notifies_group_admin() {
        let (state, service, bob) = setup();
        let transaction = service.add_transaction(deposit(&bob, dec!(500))).unwrap();

        assert_eq!(transaction.status, TransactionStatus::Pending);
        let notifications = state.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0].recipient_id.as_deref(),
            Some(DEFAULT_GROUP_ADMIN_ID)
        );
        assert_eq!(notifications[0].severity, Severity::Info);
    }

    #[test]
    fn test_approval_feeds_the_approved_total() {
        let (_state, service, bob) = setup();
        let transaction = service.add_transaction(deposit(&bob, dec!(500))).unwrap();
        service.add_transaction(deposit(&bob, dec!(300))).unwrap();

        service
            .update_transaction_status(&transaction.id, TransactionStatus::Approved, None)
            .unwrap();

        // Only the approved entry counts; the pending one does not.
        assert_eq!(service.approved_total(), dec!(500));
        let approved = service
            .get_transactions()
            .into_iter()
            .find(|t| t.id == transaction.id)
            .unwrap();
        assert_eq!(approved.status, TransactionStatus::Approved);
    }

    #[test]
    fn test_approval_notifies_owner_with_success() {
        let (state, service, bob) = setup();
        let transaction = service.add_transaction(deposit(&bob, dec!(500))).unwrap();
        service
            .update_transaction_status(&transaction.id, TransactionStatus::Approved, None)
            .unwrap();

        let decision = state
            .notifications()
            .into_iter()
            .find(|n| n.severity == Severity::Success)
            .unwrap();
        assert_eq!(decision.recipient_id.as_deref(), Some(bob.id.as_str()));
        assert!(decision.message.contains("verified"));
    }

    #[test]
    fn test_rejection_carries_the_notes() {
        let (state, service, bob) = setup();
        let transaction = service.add_transaction(deposit(&bob, dec!(500))).unwrap();

        service
            .update_transaction_status(
                &transaction.id,
                TransactionStatus::Rejected,
                Some("insufficient proof".to_string()),
            )
            .unwrap();

        let rejected = service
            .get_transactions()
            .into_iter()
            .find(|t| t.id == transaction.id)
            .unwrap();
        assert_eq!(rejected.status, TransactionStatus::Rejected);
        assert_eq!(rejected.admin_notes.as_deref(), Some("insufficient proof"));

        let decision = state
            .notifications()
            .into_iter()
            .find(|n| n.severity == Severity::Error)
            .unwrap();
        assert_eq!(decision.recipient_id.as_deref(), Some(bob.id.as_str()));
        assert!(decision.message.contains("insufficient proof"));
    }

    #[test]
    fn test_status_update_for_unknown_id_is_silent() {
        let (state, service, _bob) = setup();
        service
            .update_transaction_status("missing", TransactionStatus::Approved, None)
            .unwrap();
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn test_note_edit_has_no_notification_side_effect() {
        let (state, service, bob) = setup();
        let transaction = service.add_transaction(deposit(&bob, dec!(500))).unwrap();
        let before = state.notifications().len();

        let updated = service
            .update_transaction(
                &transaction.id,
                TransactionUpdate {
                    admin_notes: Some("checked receipt".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert_eq!(updated.admin_notes.as_deref(), Some("checked receipt"));
        assert_eq!(updated.status, TransactionStatus::Pending);
        assert_eq!(state.notifications().len(), before);
    }

    #[test]
    fn test_repeated_submission_creates_distinct_records() {
        let (_state, service, bob) = setup();
        service.add_transaction(deposit(&bob, dec!(500))).unwrap();
        service.add_transaction(deposit(&bob, dec!(500))).unwrap();
        assert_eq!(service.get_transactions().len(), 2);
    }

    #[test]
    fn test_delete_is_unconditional() {
        let (_state, service, bob) = setup();
        let transaction = service.add_transaction(deposit(&bob, dec!(500))).unwrap();
        service.delete_transaction(&transaction.id).unwrap();
        assert!(service.get_transactions().is_empty());
        service.delete_transaction(&transaction.id).unwrap();
    }

    #[test]
    fn test_user_ledger_is_newest_first() {
        let (_state, service, bob) = setup();
        let mut early = deposit(&bob, dec!(100));
        early.date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut late = deposit(&bob, dec!(200));
        late.date = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        service.add_transaction(early).unwrap();
        service.add_transaction(late).unwrap();

        let ledger = service.get_user_transactions(&bob.id);
        assert_eq!(ledger[0].amount, dec!(200));
        assert_eq!(ledger[1].amount, dec!(100));
    }

    proptest! {
        // Every submission starts PENDING, whatever the payload looks like.
        #[test]
        fn prop_every_submission_starts_pending(
            amount in -1_000_000i64..1_000_000i64,
            description in ".{0,40}",
        ) {
            let (_state, service, bob) = setup();
            let mut new_transaction = deposit(&bob, Decimal::from(amount));
            new_transaction.description = description;
            let transaction = service.add_transaction(new_transaction).unwrap();
            prop_assert_eq!(transaction.status, TransactionStatus::Pending);
        }
    }
}
