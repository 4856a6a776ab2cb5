//! Fallback-wrapping insight service.

use std::sync::Arc;

use log::warn;

use crate::prompt::GroupSnapshot;
use crate::provider::InsightProviderTrait;

/// Static reply substituted for any provider failure. Raw failure details
/// stay in the logs and never reach the chat channel.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I can't reach the assistant right now. Please try again in a moment.";

/// Wraps a provider and guarantees a printable answer.
pub struct InsightService {
    provider: Arc<dyn InsightProviderTrait>,
}

impl InsightService {
    pub fn new(provider: Arc<dyn InsightProviderTrait>) -> Self {
        Self { provider }
    }

    /// Answers a member question against a group snapshot. This never
    /// fails: provider errors come back as [`FALLBACK_MESSAGE`].
    pub async fn ask(&self, snapshot: &GroupSnapshot, question: &str) -> String {
        let question = question.trim();
        if question.is_empty() {
            return FALLBACK_MESSAGE.to_string();
        }
        match self.provider.complete(&snapshot.system_prompt(question)).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Insight provider failed: {}", e);
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}
