//! Dashboard route handler.
//!
//! Serves the embedded question page.

use axum::response::{Html, IntoResponse};

const DASHBOARD_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the question page.
pub async fn index() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

/// GET /api/health - Liveness check.
pub async fn health() -> &'static str {
    "ok"
}
