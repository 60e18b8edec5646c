use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cleanvit_backend::api::auth::CleanerDirectory;
use cleanvit_backend::app;
use cleanvit_backend::app_state::AppState;
use cleanvit_backend::config::Config;
use cleanvit_backend::db::store::RequestStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    Config::init();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cleanvit_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::get();

    let store = RequestStore::new(&config.data_file);
    // An unreadable or malformed store is fatal here; later failures are
    // reported to the failing operation's caller only.
    store
        .load()
        .with_context(|| format!("cleaning request store at {:?} is unusable", config.data_file))?;
    info!("Request store ready at {:?}", config.data_file);

    let state = AppState {
        store: Arc::new(store),
        cleaners: Arc::new(CleanerDirectory::with_default_roster()),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Clean VIT backend running at http://{addr}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server encountered an error")?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Received Ctrl+C, shutting down...");
    }
}
