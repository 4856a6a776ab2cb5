use async_trait::async_trait;
use log::warn;

use super::payments_model::{CheckoutRequest, CheckoutResponse, PaymentError};
use crate::errors::Result;

/// Trait for initiating a mobile-money checkout.
#[async_trait]
pub trait CheckoutClientTrait: Send + Sync {
    /// Fire-and-forget initiation: no retry, no cancellation, no timeout
    /// beyond the transport's own. Transport failures surface as a
    /// terminal error response, never as an `Err`.
    async fn initiate(&self, request: &CheckoutRequest) -> Result<CheckoutResponse>;
}

/// HTTP checkout client for an STK-push style gateway.
pub struct HttpCheckoutClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpCheckoutClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        HttpCheckoutClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }
}

#[async_trait]
impl CheckoutClientTrait for HttpCheckoutClient {
    async fn initiate(&self, request: &CheckoutRequest) -> Result<CheckoutResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(PaymentError::MissingApiKey)?;

        let sent = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                warn!("Checkout transport failed: {}", e);
                return Ok(CheckoutResponse::error("Payment service is unavailable"));
            }
        };

        match response.json::<CheckoutResponse>().await {
            Ok(body) => Ok(body),
            Err(e) => {
                warn!("Checkout response could not be decoded: {}", e);
                Ok(CheckoutResponse::error("Payment service returned an unexpected response"))
            }
        }
    }
}
