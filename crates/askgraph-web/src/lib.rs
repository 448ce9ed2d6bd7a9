//! askgraph web server
//!
//! Axum-based question page and JSON API over the askgraph pipeline.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use askgraph_core::Pipeline;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/ask", post(routes::ask::ask))
        .route("/health", get(routes::dashboard::health))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(pipeline: Pipeline, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(pipeline);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
