mod config;
mod errors;
mod models;
mod routes;
mod service;
mod tools;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::routes::api_routes::router;
use crate::service::contract_service::ContractService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agent_contract_api=debug,tower_http=debug".into()),
        )
        .init();

    // ── Configuration ─────────────────────────────────────────────────────────
    let config = AppConfig::from_env()?;
    info!(
        profile = %config.profile,
        tools_enabled = config.tools_enabled,
        tool_provider = ?config.tool_provider,
        "Configuration loaded"
    );

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let provider = config.tool_provider.build(config.composio_api_key.clone());
    if config.tools_enabled {
        if let Err(e) = provider.catalog() {
            warn!("Tool provider '{}' unavailable at startup: {e}", provider.name());
        }
    }
    let contract = ContractService::new(config.profile, config.tools_enabled, provider);

    // ── Router ────────────────────────────────────────────────────────────────
    let app = router(contract);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
