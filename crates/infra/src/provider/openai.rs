//! OpenAI-compatible chat-completions adapter.
//!
//! Sends the system prompt as a `system` message and the directive plus image
//! as a two-part `user` message (`text` + `image_url`). Reads the answer from
//! `choices[0].message.content`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use truthlens_ai::{CompletionProvider, CompletionRequest, ProviderError};

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}

/// HTTP client for `<base_url>/chat/completions`.
///
/// Holds one `reqwest::Client` (connection pool) for the life of the process.
#[derive(Clone)]
pub struct OpenAiProvider {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenAiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    /// `timeout` bounds the whole round trip, body included.
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn body(request: &CompletionRequest) -> serde_json::Value {
        json!({
            "model": request.model,
            "temperature": request.temperature,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": request.user_text },
                        {
                            "type": "image_url",
                            "image_url": { "url": request.image_data_uri }
                        }
                    ]
                }
            ]
        })
    }
}

impl core::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    #[instrument(skip_all, fields(model = %request.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let res = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&Self::body(&request))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "provider rejected request");
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletion = res
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ProviderError::EmptyResponse)
    }
}
