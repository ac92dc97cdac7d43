use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use truthlens_core::{DomainError, Score};

use crate::provider::ProviderError;

/// Classification the model assigns to the whole image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageType {
    WhatsappMessage,
    PeoplePhoto,
    AiGeneratedArt,
    NormalPhoto,
    Deepfake,
    Photoshopped,
    Meme,
    DocumentScreenshot,
}

impl ImageType {
    pub const ALL: [ImageType; 8] = [
        ImageType::WhatsappMessage,
        ImageType::PeoplePhoto,
        ImageType::AiGeneratedArt,
        ImageType::NormalPhoto,
        ImageType::Deepfake,
        ImageType::Photoshopped,
        ImageType::Meme,
        ImageType::DocumentScreenshot,
    ];

    /// Wire name, as listed in the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::WhatsappMessage => "whatsapp_message",
            ImageType::PeoplePhoto => "people_photo",
            ImageType::AiGeneratedArt => "ai_generated_art",
            ImageType::NormalPhoto => "normal_photo",
            ImageType::Deepfake => "deepfake",
            ImageType::Photoshopped => "photoshopped",
            ImageType::Meme => "meme",
            ImageType::DocumentScreenshot => "document_screenshot",
        }
    }
}

/// A face found in the image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    /// Public figure's name, or `"unknown"`.
    pub name: String,
    pub confidence: Score,
    pub description: String,
    pub is_public_figure: bool,
}

impl Person {
    pub const UNKNOWN: &'static str = "unknown";

    pub fn is_unknown(&self) -> bool {
        self.name.eq_ignore_ascii_case(Self::UNKNOWN)
    }
}

/// Validated model verdict for one image.
///
/// This mirrors the JSON skeleton of the analysis prompt field for field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub image_type: ImageType,
    pub people_detected: Vec<Person>,
    pub ai_artifact_score: Score,
    pub manipulation_score: Score,
    pub realism_score: Score,
    pub is_fake: bool,
    /// 100 = very likely authentic, 0 = very likely fabricated.
    pub truth_score: Score,
    pub reasoning: String,
}

// Wire shapes: scores arrive as plain integers and are range-checked in the
// conversion so errors can name the offending field.
#[derive(Debug, Deserialize)]
struct WirePerson {
    name: String,
    confidence: i64,
    description: String,
    is_public_figure: bool,
}

#[derive(Debug, Deserialize)]
struct WireAnalysisResult {
    image_type: ImageType,
    people_detected: Vec<WirePerson>,
    ai_artifact_score: i64,
    manipulation_score: i64,
    realism_score: i64,
    is_fake: bool,
    truth_score: i64,
    reasoning: String,
}

impl TryFrom<WireAnalysisResult> for AnalysisResult {
    type Error = DomainError;

    fn try_from(w: WireAnalysisResult) -> Result<Self, Self::Error> {
        let people_detected = w
            .people_detected
            .into_iter()
            .map(|p| {
                Ok(Person {
                    name: p.name,
                    confidence: Score::new("people_detected[].confidence", p.confidence)?,
                    description: p.description,
                    is_public_figure: p.is_public_figure,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(AnalysisResult {
            image_type: w.image_type,
            people_detected,
            ai_artifact_score: Score::new("ai_artifact_score", w.ai_artifact_score)?,
            manipulation_score: Score::new("manipulation_score", w.manipulation_score)?,
            realism_score: Score::new("realism_score", w.realism_score)?,
            is_fake: w.is_fake,
            truth_score: Score::new("truth_score", w.truth_score)?,
            reasoning: w.reasoning,
        })
    }
}

impl AnalysisResult {
    /// Validate an already-parsed JSON object against the result schema.
    ///
    /// Fails closed: a missing field, a wrong type, an unknown `image_type` or a
    /// score outside 0..=100 is a `SchemaIncomplete` error carrying `raw`.
    /// Extra fields are ignored.
    pub fn from_value(value: JsonValue, raw: &str) -> Result<Self, AiError> {
        let wire: WireAnalysisResult = serde_json::from_value(value)
            .map_err(|e| AiError::schema_incomplete(raw, e.to_string()))?;
        AnalysisResult::try_from(wire).map_err(|e| AiError::schema_incomplete(raw, e.to_string()))
    }
}

/// Failure of one analysis, from provider call to validated result.
#[derive(Debug, Error)]
pub enum AiError {
    /// The provider call itself failed (network, auth, quota, rejected request).
    #[error("provider call failed: {0}")]
    Provider(#[from] ProviderError),

    /// The response did not parse as JSON, even after normalization.
    #[error("model response is not valid JSON: {reason}")]
    MalformedResponse { raw: String, reason: String },

    /// The response parsed but does not match the result schema.
    #[error("model response does not match the result schema: {reason}")]
    SchemaIncomplete { raw: String, reason: String },
}

impl AiError {
    pub fn malformed_response(raw: &str, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }

    pub fn schema_incomplete(raw: &str, reason: impl Into<String>) -> Self {
        Self::SchemaIncomplete {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }

    /// The unmodified model output, when the failure happened after the call.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            AiError::Provider(_) => None,
            AiError::MalformedResponse { raw, .. } | AiError::SchemaIncomplete { raw, .. } => {
                Some(raw)
            }
        }
    }
}
