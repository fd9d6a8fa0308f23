pub mod api; // HTTP API
pub mod charts; // Chart descriptions
pub mod config;
pub mod export; // CSV + PDF reports
pub mod intake; // Daily symptom form
pub mod models;
pub mod recommendation;
pub mod simulation; // ICP / CBF recovery model
pub mod table;
pub mod tracker; // Full pipeline

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `config::default_log_filter()`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Run the API server until Ctrl-C.
pub async fn run_server(addr: SocketAddr) -> Result<(), api::ServerError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let server = api::start_server(addr, simulation::RecoveryModel::default()).await?;
    tracing::info!(addr = %server.session.server_addr, "listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
    }

    server.stop().await;
    Ok(())
}
