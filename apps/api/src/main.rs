mod analysis;
mod audit;
mod config;
mod errors;
mod report;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::audit::client::PagespeedClient;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sitegauge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the audit fetcher (PageSpeed Insights)
    let auditor = match &config.pagespeed_api_url {
        Some(base) => PagespeedClient::with_base_url(base.clone(), config.pagespeed_api_key.clone()),
        None => PagespeedClient::new(config.pagespeed_api_key.clone()),
    };
    info!(
        "Audit client initialized (key configured: {})",
        config.pagespeed_api_key.is_some()
    );

    let state = AppState {
        config: config.clone(),
        auditor: Arc::new(auditor),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
