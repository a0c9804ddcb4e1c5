//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::calculator::{api_evaluate, api_size_curve, calculator_page};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(calculator_page))

        // API endpoints
        .route("/api/evaluate", get(api_evaluate))
        .route("/api/size-curve", get(api_size_curve))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
