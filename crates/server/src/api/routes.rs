use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use super::{events, handlers, media, middleware};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let ui_dir = state.config().server.ui_dir.clone();

    // API routes
    let api_routes = Router::new()
        // Settings
        .route(
            "/config",
            get(handlers::get_config).post(handlers::update_config),
        )
        .route("/status", get(handlers::get_status))
        // Plays
        .route("/next-event", get(events::next_event))
        .route("/simulate-hit", post(events::simulate_hit))
        .route("/test-spin", post(events::test_spin));

    // Serve the cabinet UI with SPA fallback
    let serve_dir = ServeDir::new(&ui_dir).fallback(ServeFile::new(ui_dir.join("index.html")));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .route("/media/{kind}", get(media::serve_media))
        .route_service("/settings", ServeFile::new(ui_dir.join("settings.html")))
        .nest("/api", api_routes)
        .fallback_service(serve_dir)
        .layer(from_fn_with_state(state.clone(), middleware::startup_middleware))
        .layer(from_fn(middleware::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
