//! Lori API: REST endpoints for hate-speech analysis
//!
//! | Route                        | Method | Reply                           |
//! |------------------------------|--------|---------------------------------|
//! | `/api/check-hate-speech`     | POST   | analysis envelope               |
//! | `/api/check-hate-speech`     | GET    | liveness envelope               |
//! | `/api/health`                | GET    | `{status, version, timestamp}`  |
//! | `/api/categories`            | GET    | taxonomy envelope               |
//! | `/api/labels`                | GET    | classifier labels envelope      |
//! | `/`                          | GET    | welcome message                 |
//! | `/metrics`                   | GET    | prometheus text format          |
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod state;

use anyhow::Context;
use axum::{error_handling::HandleErrorLayer, extract::DefaultBodyLimit, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use state::AppState;

pub fn create_app(state: AppState, config: &ApiConfig) -> Router {
    let mut router = Router::new()
        .route(
            "/api/check-hate-speech",
            get(handlers::api_status).post(handlers::check_hate_speech),
        )
        .route("/api/health", get(handlers::health))
        .route("/api/categories", get(handlers::categories))
        .route("/api/labels", get(handlers::labels))
        .route("/metrics", get(handlers::metrics))
        .route("/", get(handlers::root))
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    // Elapsed requests render the error envelope with 408
    if let Some(timeout) = config.request_timeout() {
        router = router.layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(error::handle_layer_error))
                .timeout(timeout),
        );
    }

    router
        .layer(axum::middleware::from_fn(middleware::request_logging))
        .layer(middleware::cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the global `tracing` subscriber; `RUST_LOG` wins over `default_level`
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

pub async fn run(config: ApiConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let app = create_app(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!(
        addr = %config.addr,
        positive_label = %config.positive_label,
        "Lori API listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Lori API stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(err) => {
            tracing::error!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
