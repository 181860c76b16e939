//! Reservation action server binary.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use rb_action_server::config::ApiConfig;
use rb_action_server::routes::build_router;
use rb_action_server::state::AppState;
use rb_store::{PgConfig, PgReservationStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "rb-action-server starting");

    let config = ApiConfig::from_env();

    // A failed pool leaves the store degraded rather than aborting —
    // the webhook still answers, with failure messages, until the
    // database comes back and the process is restarted.
    let store = PgReservationStore::connect(&PgConfig::from_env()).await;
    let state = AppState::with_store(Arc::new(store));

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
