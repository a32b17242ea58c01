use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arxiv_stats::app::{build_app, AppState};
use arxiv_stats::config::Config;
use arxiv_stats::source::{DataSource, HttpDataSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("arxiv_stats=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Loaded configuration");

    // Initialize upstream data source
    let source: Arc<dyn DataSource> = Arc::new(
        HttpDataSource::new(&config.upstream).context("failed to build upstream HTTP client")?,
    );
    info!("📡 Reading statistics from {}", config.upstream.base_url);
    match config.upstream.timeout_secs {
        Some(secs) => info!("   - upstream request timeout: {}s", secs),
        None => info!("   - no upstream request timeout"),
    }

    if let Some(ref static_dir) = config.frontend.static_dir {
        info!("🎨 Serving frontend assets from directory: {}", static_dir);
    } else {
        info!("🎨 Serving embedded frontend assets");
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config, source)?);
    info!(
        "🕒 Default timezone: {} (views expire after {}s idle)",
        state.default_timezone.name(),
        state.config.views.idle_secs
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("🚀 Dashboard listening on http://{}", addr);
    info!("   - Pages available at http://{}/stats", addr);
    info!("   - API endpoints available at http://{}/api/...", addr);

    axum::serve(listener, build_app(state)).await?;

    Ok(())
}
