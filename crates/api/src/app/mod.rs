//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared analyzer and its provider
//! - `routes/`: HTTP routes + handlers
//! - `report.rs`: presentation of a verdict (view model + HTML)
//! - `dto.rs`: JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Extension, Router};
use tower::ServiceBuilder;

use truthlens_ai::{AnalysisSettings, CompletionProvider, ProviderError};
use truthlens_infra::OpenAiProvider;

use crate::config::AppConfig;

pub mod dto;
pub mod errors;
pub mod report;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Requires a validated `AppConfig`, so a missing credential stops startup
/// before any route exists.
pub fn build_app(config: &AppConfig) -> Result<Router, ProviderError> {
    let provider = OpenAiProvider::new(
        config.api_key.expose(),
        &config.api_base_url,
        config.request_timeout,
    )?;

    Ok(build_app_with_provider(
        Arc::new(provider),
        config.analysis.clone(),
        config.max_upload_bytes,
    ))
}

/// Same router, with the provider supplied by the caller (tests, demos).
pub fn build_app_with_provider(
    provider: Arc<dyn CompletionProvider>,
    settings: AnalysisSettings,
    max_upload_bytes: usize,
) -> Router {
    let services = Arc::new(services::build_services(provider, settings));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::system::not_found)
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(DefaultBodyLimit::max(max_upload_bytes)))
}
