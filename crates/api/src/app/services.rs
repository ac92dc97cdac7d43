use std::sync::Arc;

use truthlens_ai::{AnalysisClient, AnalysisSettings, CompletionProvider, ImageAnalyzer};

/// Shared, read-only services handed to every request.
///
/// Built once at startup; the provider (and its HTTP connection pool) is shared
/// by all uploads.
#[derive(Debug, Clone)]
pub struct AppServices {
    analyzer: ImageAnalyzer,
}

impl AppServices {
    pub fn analyzer(&self) -> &ImageAnalyzer {
        &self.analyzer
    }
}

pub fn build_services(
    provider: Arc<dyn CompletionProvider>,
    settings: AnalysisSettings,
) -> AppServices {
    tracing::info!(
        provider = provider.name(),
        model = %settings.model,
        temperature = settings.temperature,
        "analysis services ready"
    );
    AppServices {
        analyzer: ImageAnalyzer::new(AnalysisClient::new(provider, settings)),
    }
}
