use anyhow::Context;

use truthlens_api::config::{self, AppConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    truthlens_observability::init(config::log_format_from_env());

    let config = AppConfig::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "configuration error; refusing to start"))?;

    let app = truthlens_api::app::build_app(&config).context("failed to build provider client")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
