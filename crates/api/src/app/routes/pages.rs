use std::sync::Arc;

use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::app::errors::Failure;
use crate::app::report::{self, ReportView};
use crate::app::routes::common;
use crate::app::services::AppServices;

/// `GET /`: the upload form.
pub async fn index() -> Html<String> {
    Html(report::index_html())
}

/// `POST /report`: multipart upload in, HTML report out.
pub async fn report(
    Extension(services): Extension<Arc<AppServices>>,
    multipart: Multipart,
) -> axum::response::Response {
    let request = match common::read_upload(multipart).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "rejected upload");
            return failure_page(Failure::from(&e));
        }
    };

    match services.analyzer().analyze(&request).await {
        Ok(analysis) => {
            let view = ReportView::from_analysis(&analysis);
            (StatusCode::OK, Html(report::render_report_html(&view))).into_response()
        }
        Err(e) => failure_page(Failure::from(&e)),
    }
}

fn failure_page(failure: Failure) -> axum::response::Response {
    (failure.status, Html(report::render_failure_html(&failure))).into_response()
}
