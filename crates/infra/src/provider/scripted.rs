use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use truthlens_ai::{CompletionProvider, CompletionRequest, ProviderError};

/// In-memory provider that replays queued outcomes in order.
///
/// Intended for tests/dev. Every request is recorded so callers can assert on
/// what would have been sent. An empty queue answers with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    outcomes: Mutex<VecDeque<Result<String, ProviderError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose queue starts with the given texts.
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::new();
        for r in responses {
            provider.push_response(r);
        }
        provider
    }

    pub fn push_response(&self, text: impl Into<String>) {
        self.outcomes.lock().unwrap().push_back(Ok(text.into()));
    }

    pub fn push_error(&self, error: ProviderError) {
        self.outcomes.lock().unwrap().push_back(Err(error));
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Transport("scripted provider exhausted".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "m".to_string(),
            temperature: 0.1,
            system_prompt: "s".to_string(),
            user_text: "u".to_string(),
            image_data_uri: "data:image/png;base64,".to_string(),
        }
    }

    #[tokio::test]
    async fn replays_in_order_then_runs_dry() {
        let p = ScriptedProvider::with_responses(["first"]);
        p.push_error(ProviderError::Status {
            status: 500,
            body: "boom".to_string(),
        });

        assert_eq!(p.complete(request()).await.unwrap(), "first");
        assert!(matches!(
            p.complete(request()).await,
            Err(ProviderError::Status { status: 500, .. })
        ));
        assert!(matches!(
            p.complete(request()).await,
            Err(ProviderError::Transport(_))
        ));
        assert_eq!(p.requests().len(), 3);
    }
}
