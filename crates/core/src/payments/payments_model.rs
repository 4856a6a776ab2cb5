//! Payment checkout domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payment boundary errors.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Payment API key is not configured")]
    MissingApiKey,

    #[error("Checkout failed: {0}")]
    Gateway(String),
}

/// Outbound checkout initiation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub phone_number: String,
    pub amount: Decimal,
    pub currency: String,
    /// Free-text narrative shown on the payer's statement.
    pub narrative: String,
}

/// Gateway-reported state of an initiated checkout. `PendingConfirmation`
/// and `Success` both mean the initiation was accepted; neither is a
/// confirmed deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum CheckoutStatus {
    PendingConfirmation,
    Success,
    Error,
}

/// Body returned by the checkout endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub status: CheckoutStatus,
    pub transaction_ref: Option<String>,
    /// Error description when `status` is `Error`. Raw transport details
    /// never reach persisted state.
    pub error: Option<String>,
}

impl CheckoutResponse {
    /// Terminal error response substituted for any transport or API
    /// failure.
    pub fn error(message: impl Into<String>) -> Self {
        CheckoutResponse {
            status: CheckoutStatus::Error,
            transaction_ref: None,
            error: Some(message.into()),
        }
    }
}
