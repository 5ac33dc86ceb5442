//! # Server Configuration
//!
//! This module contains the server setup and routing for Rentdesk.

use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::handlers;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/home", get(handlers::home_redirect))
        .route("/another", get(handlers::another))
        .route("/index", get(handlers::demo::index))
        .route("/add", post(handlers::demo::add_name))
        .route(
            "/report",
            get(handlers::report_form).post(handlers::report::submit_report),
        )
        .route(
            "/landlord",
            get(handlers::landlord_form).post(handlers::landlord::summary),
        )
        .route(
            "/resolve",
            get(handlers::resolve_form).post(handlers::resolve::submit),
        )
        .route("/submitted", get(handlers::submitted))
        .route("/login", get(handlers::login))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the server with the given configuration
pub async fn run_server(
    config: AppConfig,
    db: DatabaseConnection,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState { db };
    let app = create_app(state);

    let addr = config
        .socket_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on: {}", addr);
    tracing::info!("Running in profile: {}", config.profile);

    axum::serve(listener, app).await?;

    Ok(())
}
