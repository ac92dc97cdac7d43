use async_trait::async_trait;
use thiserror::Error;

/// Everything a multimodal chat-completion backend needs for one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub temperature: f32,
    /// Controlling instruction (system turn).
    pub system_prompt: String,
    /// Free-text part of the user turn.
    pub user_text: String,
    /// Image part of the user turn, as a `data:` URI.
    pub image_data_uri: String,
}

/// Why a provider call did not yield usable text.
///
/// Kinds are kept for logging; callers treat them all as one failure channel.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never got a response (DNS, TLS, timeout, connection reset).
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status (auth, quota, bad request).
    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response envelope could not be decoded.
    #[error("unexpected provider response: {0}")]
    Decode(String),

    /// The envelope decoded but carried no message content.
    #[error("provider returned no message content")]
    EmptyResponse,
}

/// A multimodal completion backend.
///
/// Implementations live in `truthlens-infra` (HTTP) or in tests. One call per
/// request; implementations must not retry.
#[async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    /// Short name used in logs (e.g. `openai`).
    fn name(&self) -> &str;

    /// Send the request and return the model's raw text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;
}
