//! Upload model: the image bytes and what kind of image they claim to be.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::AnalysisId;

/// Image formats accepted for analysis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Jpeg,
    Png,
}

impl MediaType {
    /// File extensions accepted by the upload form.
    pub const ACCEPTED_EXTENSIONS: [&'static str; 3] = ["jpg", "jpeg", "png"];

    /// Resolve from a file extension (case-insensitive, no leading dot).
    pub fn from_extension(ext: &str) -> DomainResult<Self> {
        match ext.trim().to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            other => Err(DomainError::unsupported_media_type(format!(".{other}"))),
        }
    }

    /// Resolve from a MIME type such as `image/png`.
    pub fn from_mime(mime: &str) -> DomainResult<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence.to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Ok(Self::Jpeg),
            "image/png" => Ok(Self::Png),
            other => Err(DomainError::unsupported_media_type(other.to_string())),
        }
    }

    /// Resolve from an uploaded file name, e.g. `holiday.JPG`.
    pub fn from_file_name(file_name: &str) -> DomainResult<Self> {
        match file_name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() || !ext.is_empty() => Self::from_extension(ext),
            _ => Err(DomainError::unsupported_media_type(format!(
                "{file_name} (no extension)"
            ))),
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

impl core::fmt::Display for MediaType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_mime())
    }
}

/// One uploaded image, ready to be analyzed.
///
/// Owned by the request that created it and dropped once the provider call
/// completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    id: AnalysisId,
    image_bytes: Vec<u8>,
    media_type: MediaType,
}

impl AnalysisRequest {
    pub fn new(image_bytes: Vec<u8>, media_type: MediaType) -> Self {
        Self {
            id: AnalysisId::new(),
            image_bytes,
            media_type,
        }
    }

    /// Build a request from a multipart upload.
    ///
    /// The file name's extension decides the media type; the declared content
    /// type is only consulted when the client sent no file name. An empty body
    /// is rejected.
    pub fn from_upload(
        file_name: Option<&str>,
        content_type: Option<&str>,
        image_bytes: Vec<u8>,
    ) -> DomainResult<Self> {
        let media_type = match (file_name.filter(|n| !n.trim().is_empty()), content_type) {
            (Some(name), _) => MediaType::from_file_name(name)?,
            (None, Some(mime)) => MediaType::from_mime(mime)?,
            (None, None) => {
                return Err(DomainError::unsupported_media_type(
                    "upload has neither a file name nor a content type",
                ));
            }
        };

        if image_bytes.is_empty() {
            return Err(DomainError::validation("uploaded image is empty"));
        }

        Ok(Self::new(image_bytes, media_type))
    }

    pub fn id(&self) -> AnalysisId {
        self.id
    }

    pub fn image_bytes(&self) -> &[u8] {
        &self.image_bytes
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }
}
