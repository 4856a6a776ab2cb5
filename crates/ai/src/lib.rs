//! Generative-text insight boundary for Pamoja.
//!
//! This crate wraps the group-savings assistant behind a provider trait.
//! The core treats the provider as an opaque prompt-in, text-out service:
//! no structured output contract, no retry, no cancellation. Any provider
//! failure is swallowed by the service wrapper and replaced with a static
//! fallback message, so raw failure details never reach the chat channel.
//!
//! # Architecture
//!
//! - `prompt`: renders a group snapshot into the system prompt
//! - `provider`: provider trait plus the HTTP `generateContent` client
//! - `insight_service`: fallback-wrapping service consumed by callers
//! - `error`: AI boundary error types

pub mod error;
pub mod insight_service;
pub mod prompt;
pub mod provider;

pub use error::AiError;
pub use insight_service::{InsightService, FALLBACK_MESSAGE};
pub use prompt::GroupSnapshot;
pub use provider::{HttpInsightProvider, InsightProviderTrait};
