//! Server binary: loads config, opens the database, serves HTTP until Ctrl+C.

use tracing_subscriber::EnvFilter;

use achievements_api_lib::app::SharedState;
use achievements_api_lib::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Achievements API");

    let (db, config) = achievements_api_lib::init_foundation()?;
    let state = SharedState::new(db, config);

    let server_state = state.clone();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server::start_server(server_state).await {
            tracing::error!("Server failed: {e}");
        }
    });

    tracing::info!(port = state.server_port(), "Server running. Press Ctrl+C to stop.");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");

    state.shutdown_token().cancel();
    server_handle.await?;
    Ok(())
}
