use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::app::errors::Failure;
use crate::app::report::ReportView;
use crate::app::services::AppServices;
use crate::app::{dto, routes::common};

/// `POST /api/analyze`: multipart upload in, JSON verdict out.
pub async fn analyze(
    Extension(services): Extension<Arc<AppServices>>,
    multipart: Multipart,
) -> axum::response::Response {
    let request = match common::read_upload(multipart).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "rejected upload");
            return Failure::from(&e).into_json_response();
        }
    };

    match services.analyzer().analyze(&request).await {
        Ok(analysis) => {
            let report = ReportView::from_analysis(&analysis);
            (StatusCode::OK, Json(dto::analysis_to_json(&analysis, &report))).into_response()
        }
        Err(e) => Failure::from(&e).into_json_response(),
    }
}
