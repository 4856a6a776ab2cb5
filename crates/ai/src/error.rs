//! AI boundary error types.

use thiserror::Error;

/// Errors raised inside the insight boundary. Callers normally never see
/// these: the service wrapper converts every one of them into the static
/// fallback message.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing API key for the provider.
    #[error("Missing API key for the insight provider")]
    MissingApiKey,

    /// Provider error (transport or API).
    #[error("Provider error: {0}")]
    Provider(String),
}

impl AiError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}
