//! Provider trait and the HTTP `generateContent` client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AiError;

/// Opaque prompt-in, text-out completion service.
#[async_trait]
pub trait InsightProviderTrait: Send + Sync {
    /// Single-shot completion. No retry, no cancellation, no timeout
    /// beyond the transport's own.
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

/// HTTP client for a `generateContent`-style text API.
pub struct HttpInsightProvider {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpInsightProvider {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        HttpInsightProvider {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl InsightProviderTrait for HttpInsightProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(AiError::MissingApiKey)?;

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::provider(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AiError::provider(format!(
                "completion request returned {}",
                response.status()
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AiError::provider(e.to_string()))?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| AiError::provider("completion had no text candidates"))
    }
}
