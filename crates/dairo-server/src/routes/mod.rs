//! HTTP routes.

mod personas;
mod prompt;
mod ui;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::app::AppState;

/// Builds the full router. `/api/*` aliases keep the paths the web UI has always used.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/health", get(ui::health))
        .route("/personas", get(personas::list))
        .route("/engineer", post(prompt::engineer))
        .route("/explain", post(prompt::explain))
        .route("/api/engineer", post(prompt::engineer))
        .route("/api/explain", post(prompt::explain))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
