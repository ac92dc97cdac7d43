use axum::extract::Multipart;

use truthlens_core::AnalysisRequest;

use crate::app::errors::UploadError;

/// Multipart field carrying the image.
pub const IMAGE_FIELD: &str = "image";

/// Read the `image` field of a multipart upload into an `AnalysisRequest`.
///
/// Other fields are skipped. Only the first `image` field is used.
pub async fn read_upload(mut multipart: Multipart) -> Result<AnalysisRequest, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        let request =
            AnalysisRequest::from_upload(file_name.as_deref(), content_type.as_deref(), bytes.to_vec())?;
        return Ok(request);
    }

    Err(UploadError::MissingImage)
}
