use std::sync::Arc;

use truthlens_core::{data_uri, AnalysisRequest};

use crate::prompt::{analysis_prompt, ANALYSIS_DIRECTIVE};
use crate::provider::{CompletionProvider, CompletionRequest};
use crate::result::AiError;

/// Model selection and sampling for analysis calls.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    pub model: String,
    /// Kept low so the model sticks to the JSON contract.
    pub temperature: f32,
}

impl AnalysisSettings {
    pub const DEFAULT_MODEL: &'static str = "gpt-4.1";
    pub const DEFAULT_TEMPERATURE: f32 = 0.1;
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            model: Self::DEFAULT_MODEL.to_string(),
            temperature: Self::DEFAULT_TEMPERATURE,
        }
    }
}

/// Sends one image plus the fixed prompt to a completion provider.
///
/// The provider is injected once at startup and shared by all requests.
#[derive(Clone)]
pub struct AnalysisClient {
    provider: Arc<dyn CompletionProvider>,
    settings: AnalysisSettings,
}

impl AnalysisClient {
    pub fn new(provider: Arc<dyn CompletionProvider>, settings: AnalysisSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Build the provider request for `request`.
    pub fn completion_request(&self, request: &AnalysisRequest) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            temperature: self.settings.temperature,
            system_prompt: analysis_prompt().to_string(),
            user_text: ANALYSIS_DIRECTIVE.to_string(),
            image_data_uri: data_uri(request),
        }
    }

    /// Make exactly one provider call and return the raw response text.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<String, AiError> {
        let completion = self.completion_request(request);
        let raw = self.provider.complete(completion).await?;
        Ok(raw)
    }
}

impl core::fmt::Debug for AnalysisClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnalysisClient")
            .field("provider", &self.provider.name())
            .field("settings", &self.settings)
            .finish()
    }
}
