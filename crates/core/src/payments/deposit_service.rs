use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;

use super::confirmation::ConfirmationPolicy;
use super::payments_client::CheckoutClientTrait;
use super::payments_model::{CheckoutRequest, CheckoutStatus, PaymentError};
use crate::errors::Result;
use crate::transactions::{NewTransaction, Transaction, TransactionServiceTrait, TransactionStatus};
use crate::utils::time_utils;

/// Input for an instant mobile-money deposit.
#[derive(Debug, Clone)]
pub struct DepositRequest {
    pub user_id: String,
    pub user_name: String,
    pub phone_number: String,
    pub amount: Decimal,
    pub currency: String,
}

/// Orchestrates the instant-deposit flow: initiate a checkout, record a
/// pending ledger entry, then approve it once the confirmation policy
/// resolves.
pub struct InstantDepositService {
    checkout: Arc<dyn CheckoutClientTrait>,
    confirmation: Arc<dyn ConfirmationPolicy>,
    transactions: Arc<dyn TransactionServiceTrait>,
}

impl InstantDepositService {
    pub fn new(
        checkout: Arc<dyn CheckoutClientTrait>,
        confirmation: Arc<dyn ConfirmationPolicy>,
        transactions: Arc<dyn TransactionServiceTrait>,
    ) -> Self {
        Self {
            checkout,
            confirmation,
            transactions,
        }
    }

    pub async fn deposit(&self, request: DepositRequest) -> Result<Transaction> {
        let response = self
            .checkout
            .initiate(&CheckoutRequest {
                phone_number: request.phone_number.clone(),
                amount: request.amount,
                currency: request.currency.clone(),
                narrative: format!("Deposit by {}", request.user_name),
            })
            .await?;

        if response.status == CheckoutStatus::Error {
            return Err(PaymentError::Gateway(
                response
                    .error
                    .unwrap_or_else(|| "Checkout was not accepted".to_string()),
            )
            .into());
        }

        let transaction_ref = response.transaction_ref.unwrap_or_default();
        let transaction = self.transactions.add_transaction(NewTransaction {
            user_id: request.user_id,
            user_name: request.user_name,
            amount: request.amount,
            currency: request.currency,
            date: time_utils::today(),
            description: "Mobile money deposit".to_string(),
            account_number: Some(transaction_ref.clone()),
            source_text: None,
        })?;
        debug!(
            "Checkout '{}' initiated for ledger entry {}",
            transaction_ref, transaction.id
        );

        if self.confirmation.confirm(&transaction_ref).await? {
            self.transactions.update_transaction_status(
                &transaction.id,
                TransactionStatus::Approved,
                Some("Mobile money deposit confirmed".to_string()),
            )?;
        }

        Ok(self
            .transactions
            .get_transactions()
            .into_iter()
            .find(|t| t.id == transaction.id)
            .unwrap_or(transaction))
    }
}
