use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use thiserror::Error;

use truthlens_ai::AiError;
use truthlens_core::DomainError;

/// Why an upload could not be turned into an `AnalysisRequest`.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("multipart field \"image\" is missing")]
    MissingImage,

    #[error("could not read upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A failed request, ready to be rendered as JSON or HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    /// Model output to show for diagnosis, when there was one.
    pub raw_response: Option<String>,
}

impl From<&AiError> for Failure {
    fn from(err: &AiError) -> Self {
        let code = match err {
            AiError::Provider(_) => "provider_error",
            AiError::MalformedResponse { .. } => "malformed_response",
            AiError::SchemaIncomplete { .. } => "schema_incomplete",
        };
        Failure {
            status: StatusCode::BAD_GATEWAY,
            code,
            message: err.to_string(),
            raw_response: err.raw_response().map(str::to_string),
        }
    }
}

impl From<&UploadError> for Failure {
    fn from(err: &UploadError) -> Self {
        let (status, code) = match err {
            UploadError::MissingImage => (StatusCode::BAD_REQUEST, "missing_image"),
            UploadError::Multipart(e) => (e.status(), "invalid_upload"),
            UploadError::Domain(DomainError::UnsupportedMediaType(_)) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_media_type")
            }
            UploadError::Domain(_) => (StatusCode::BAD_REQUEST, "invalid_upload"),
        };
        Failure {
            status,
            code,
            message: err.to_string(),
            raw_response: None,
        }
    }
}

impl Failure {
    pub fn into_json_response(self) -> axum::response::Response {
        let mut body = json!({
            "error": self.code,
            "message": self.message,
        });
        if let Some(raw) = self.raw_response {
            body["raw_response"] = json!(raw);
        }
        (self.status, axum::Json(body)).into_response()
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    Failure {
        status,
        code,
        message: message.into(),
        raw_response: None,
    }
    .into_json_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use truthlens_ai::ProviderError;

    #[test]
    fn analysis_failures_are_bad_gateway() {
        let f = Failure::from(&AiError::from(ProviderError::EmptyResponse));
        assert_eq!(f.status, StatusCode::BAD_GATEWAY);
        assert_eq!(f.code, "provider_error");
        assert!(f.raw_response.is_none());

        let f = Failure::from(&AiError::malformed_response("{{", "eof"));
        assert_eq!(f.code, "malformed_response");
        assert_eq!(f.raw_response.as_deref(), Some("{{"));

        let f = Failure::from(&AiError::schema_incomplete("{}", "missing field"));
        assert_eq!(f.code, "schema_incomplete");
        assert_eq!(f.raw_response.as_deref(), Some("{}"));
    }

    #[test]
    fn wrong_file_type_is_unsupported_media_type() {
        let err = UploadError::from(DomainError::unsupported_media_type(".gif"));
        let f = Failure::from(&err);
        assert_eq!(f.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(f.code, "unsupported_media_type");
    }

    #[test]
    fn empty_upload_is_bad_request() {
        let err = UploadError::from(DomainError::validation("uploaded image is empty"));
        assert_eq!(Failure::from(&err).status, StatusCode::BAD_REQUEST);
        assert_eq!(
            Failure::from(&UploadError::MissingImage).code,
            "missing_image"
        );
    }
}
