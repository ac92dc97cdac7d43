use axum::{
    routing::{get, post},
    Router,
};

pub mod analyze;
pub mod common;
pub mod pages;
pub mod system;

/// Router for the upload page, the HTML report and the JSON API.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/report", post(pages::report))
        .route("/api/analyze", post(analyze::analyze))
}
