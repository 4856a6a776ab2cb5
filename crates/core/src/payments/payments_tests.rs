#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    use crate::constants::DEFAULT_GROUP_ID;
    use crate::errors::{Error, Result};
    use crate::payments::{
        CheckoutClientTrait, CheckoutRequest, CheckoutResponse, CheckoutStatus, DepositRequest,
        HttpCheckoutClient, InstantDepositService, PaymentError, SimulatedConfirmation,
    };
    use crate::state::StateContainer;
    use crate::store::MemoryStore;
    use crate::transactions::{TransactionService, TransactionServiceTrait, TransactionStatus};
    use crate::users::User;

    struct StubCheckout {
        response: CheckoutResponse,
    }

    #[async_trait]
    impl CheckoutClientTrait for StubCheckout {
        async fn initiate(&self, _request: &CheckoutRequest) -> Result<CheckoutResponse> {
            Ok(self.response.clone())
        }
    }

    fn setup(response: CheckoutResponse) -> (Arc<StateContainer>, InstantDepositService, User) {
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
        let transactions: Arc<dyn TransactionServiceTrait> =
            Arc::new(TransactionService::new(state.clone()));
        let service = InstantDepositService::new(
            Arc::new(StubCheckout { response }),
            Arc::new(SimulatedConfirmation::new(Duration::ZERO)),
            transactions,
        );
        (state, service, bob)
    }

    fn deposit_request(bob: &User) -> DepositRequest {
        DepositRequest {
            user_id: bob.id.clone(),
            user_name: bob.name.clone(),
            phone_number: "+254700000001".to_string(),
            amount: dec!(1500),
            currency: "KES".to_string(),
        }
    }

    #[tokio::test]
    async fn test_accepted_checkout_ends_approved() {
        let (state, service, bob) = setup(CheckoutResponse {
            status: CheckoutStatus::PendingConfirmation,
            transaction_ref: Some("MPX-123".to_string()),
            error: None,
        });

        let transaction = service.deposit(deposit_request(&bob)).await.unwrap();
        assert_eq!(transaction.status, TransactionStatus::Approved);
        assert_eq!(transaction.account_number.as_deref(), Some("MPX-123"));
        assert_eq!(transaction.description, "Mobile money deposit");

        let ledger = state.transactions();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].status, TransactionStatus::Approved);
    }

    #[tokio::test]
    async fn test_rejected_checkout_leaves_no_ledger_entry() {
        let (state, service, bob) = setup(CheckoutResponse::error("Insufficient funds"));

        let result = service.deposit(deposit_request(&bob)).await;
        match result {
            Err(Error::Payment(PaymentError::Gateway(message))) => {
                assert_eq!(message, "Insufficient funds");
            }
            other => panic!("Expected gateway error, got {:?}", other.map(|t| t.id)),
        }
        assert!(state.transactions().is_empty());
    }

    #[tokio::test]
    async fn test_http_client_refuses_to_run_without_a_key() {
        let client = HttpCheckoutClient::new("http://localhost:9/checkout", None);
        let result = client
            .initiate(&CheckoutRequest {
                phone_number: "+254700000001".to_string(),
                amount: dec!(1500),
                currency: "KES".to_string(),
                narrative: "Deposit by Bob".to_string(),
            })
            .await;
        assert!(matches!(
            result,
            Err(Error::Payment(PaymentError::MissingApiKey))
        ));
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_as_error_response() {
        // Port 9 (discard) is not listening, so the request fails at the
        // transport layer and the client substitutes a terminal response.
        let client = HttpCheckoutClient::new(
            "http://127.0.0.1:9/checkout",
            Some("test-key".to_string()),
        );
        let response = client
            .initiate(&CheckoutRequest {
                phone_number: "+254700000001".to_string(),
                amount: dec!(1500),
                currency: "KES".to_string(),
                narrative: "Deposit by Bob".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.status, CheckoutStatus::Error);
        assert!(response.transaction_ref.is_none());
    }
}
