use std::time::Duration;

use async_trait::async_trait;
use log::debug;

use crate::errors::Result;

/// Decides when an initiated checkout counts as a settled deposit.
#[async_trait]
pub trait ConfirmationPolicy: Send + Sync {
    /// Resolves once the deposit should be treated as confirmed (or not).
    async fn confirm(&self, transaction_ref: &str) -> Result<bool>;
}

/// The legacy behavior: wait a fixed delay, then report confirmed
/// unconditionally. No webhook is consulted. Kept behind the policy trait
/// so a real confirmation mechanism can replace it.
pub struct SimulatedConfirmation {
    delay: Duration,
}

impl SimulatedConfirmation {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ConfirmationPolicy for SimulatedConfirmation {
    async fn confirm(&self, transaction_ref: &str) -> Result<bool> {
        tokio::time::sleep(self.delay).await;
        debug!(
            "Simulated confirmation for '{}' after {:?}",
            transaction_ref, self.delay
        );
        Ok(true)
    }
}
