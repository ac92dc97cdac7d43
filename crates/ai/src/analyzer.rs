use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;

use truthlens_core::{AnalysisId, AnalysisRequest};

use crate::client::AnalysisClient;
use crate::normalizer::parse_response;
use crate::prompt::ANALYSIS_PROMPT_VERSION;
use crate::result::{AiError, AnalysisResult};

/// A completed analysis: the validated result plus what produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub analysis_id: AnalysisId,
    pub model: String,
    pub prompt_version: &'static str,
    pub analyzed_at: DateTime<Utc>,
    pub result: AnalysisResult,
    /// The parsed object as the model sent it (after normalization).
    pub parsed: JsonValue,
    /// The model's text before normalization.
    pub raw_response: String,
}

/// Runs the full pipeline for one upload:
/// encode, call the provider once, normalize, parse, validate.
#[derive(Debug, Clone)]
pub struct ImageAnalyzer {
    client: AnalysisClient,
}

impl ImageAnalyzer {
    pub fn new(client: AnalysisClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AnalysisClient {
        &self.client
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<Analysis, AiError> {
        let analysis_id = request.id();
        let model = self.client.settings().model.clone();

        tracing::info!(
            %analysis_id,
            provider = self.client.provider_name(),
            model = %model,
            prompt_version = ANALYSIS_PROMPT_VERSION,
            media_type = %request.media_type(),
            image_bytes = request.image_bytes().len(),
            "analysis started"
        );

        let outcome = self.run(request).await;

        match &outcome {
            Ok((result, _, _)) => tracing::info!(
                %analysis_id,
                image_type = result.image_type.as_str(),
                is_fake = result.is_fake,
                truth_score = result.truth_score.value(),
                people = result.people_detected.len(),
                "analysis finished"
            ),
            Err(e) => tracing::warn!(%analysis_id, error = %e, "analysis failed"),
        }

        let (result, parsed, raw_response) = outcome?;
        Ok(Analysis {
            analysis_id,
            model,
            prompt_version: ANALYSIS_PROMPT_VERSION,
            analyzed_at: Utc::now(),
            result,
            parsed,
            raw_response,
        })
    }

    async fn run(
        &self,
        request: &AnalysisRequest,
    ) -> Result<(AnalysisResult, JsonValue, String), AiError> {
        let raw = self.client.analyze(request).await?;
        let parsed = parse_response(&raw)?;
        let result = AnalysisResult::from_value(parsed.clone(), &raw)?;
        Ok((result, parsed, raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AnalysisSettings;
    use crate::provider::{CompletionProvider, CompletionRequest, ProviderError};
    use crate::result::ImageType;
    use async_trait::async_trait;
    use std::sync::Arc;
    use truthlens_core::MediaType;

    struct FixedProvider(&'static str);

    #[async_trait]
    impl CompletionProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    fn analyzer(response: &'static str) -> ImageAnalyzer {
        ImageAnalyzer::new(AnalysisClient::new(
            Arc::new(FixedProvider(response)),
            AnalysisSettings::default(),
        ))
    }

    fn upload() -> AnalysisRequest {
        AnalysisRequest::new(vec![0xff, 0xd8], MediaType::Jpeg)
    }

    const FENCED: &str = "```json\n{\"image_type\": \"meme\", \"people_detected\": [], \
        \"ai_artifact_score\": 40, \"manipulation_score\": 55, \"realism_score\": 30, \
        \"is_fake\": true, \"truth_score\": 20, \"reasoning\": \"Caption pasted over a stock photo.\"\n```";

    #[tokio::test]
    async fn fenced_and_truncated_response_is_recovered() {
        let analysis = analyzer(FENCED).analyze(&upload()).await.unwrap();
        assert_eq!(analysis.result.image_type, ImageType::Meme);
        assert!(analysis.result.is_fake);
        assert_eq!(analysis.result.truth_score.value(), 20);
        assert_eq!(analysis.raw_response, FENCED);
        assert_eq!(analysis.parsed["manipulation_score"], 55);
        assert_eq!(analysis.prompt_version, ANALYSIS_PROMPT_VERSION);
        assert_eq!(analysis.model, "gpt-4.1");
    }

    #[tokio::test]
    async fn unparseable_response_surfaces_raw_text() {
        let err = analyzer("Sorry, I cannot analyze this image.")
            .analyze(&upload())
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::MalformedResponse { .. }));
        assert_eq!(err.raw_response(), Some("Sorry, I cannot analyze this image."));
    }

    #[tokio::test]
    async fn parseable_but_incomplete_response_fails_closed() {
        let err = analyzer(r#"{"image_type": "meme"}"#)
            .analyze(&upload())
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::SchemaIncomplete { .. }));
    }
}
