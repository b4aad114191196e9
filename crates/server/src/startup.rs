use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown", "ctrl-c received, draining connections");
}

/// Public entry: load config, open the database, build the app and serve.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cfg = configs::AppConfig::load_and_validate()?;

    common::env::ensure_database_dir(&cfg.database.url).await?;
    let db = models::db::connect(&cfg.database).await?;
    let state = AppState::seaorm(db);

    let app = routes::build_router(state, build_cors());
    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "petclinic listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
