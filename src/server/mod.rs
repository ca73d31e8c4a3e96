//! HTTP server for the dashboard page and its JSON API.

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::cli::AppConfig;
use crate::data::{Dataset, Storage};

/// Shared state behind every handler: the read-only loaded table.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

/// Install the global tracing subscriber (`RUST_LOG`, default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the dashboard router over the loaded dataset.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index_handler))
        .route("/api/meta", get(handlers::meta_handler))
        .route("/api/states", get(handlers::states_handler))
        .route("/api/dashboard", get(handlers::dashboard_handler))
        .with_state(state)
}

/// Load the dataset and serve the dashboard until interrupted.
pub async fn run(config: AppConfig) -> Result<()> {
    let storage = Storage::new(config.data_dir.clone());
    let dataset = storage.load_dataset()?;
    info!(
        records = dataset.records.len(),
        district_detail = dataset.has_district_detail,
        "loaded salary dataset"
    );

    let state = AppState {
        dataset: Arc::new(dataset),
    };
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid bind address {}:{}", config.host, config.port))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("dashboard listening on http://{addr}");

    axum::serve(listener, app).await.context("server failed")
}
