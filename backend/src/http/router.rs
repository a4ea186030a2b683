//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{dashboard, events, landing, map, ranking, selection, timeline};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive, the dashboard frontend may be served elsewhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Controls
        .route(landing::GET_OPTIONS, get(handlers::get_options))
        // Charts
        .route(dashboard::GET_DASHBOARD, get(handlers::get_dashboard))
        .route(map::GET_MAP_CHART, get(handlers::get_map_chart))
        .route(ranking::GET_RANKING_CHART, get(handlers::get_ranking_chart))
        .route(timeline::GET_TIMELINE_CHART, get(handlers::get_timeline_chart))
        // Raw records
        .route(events::LIST_EVENTS, get(handlers::list_events))
        .route(events::GET_EVENT, get(handlers::get_event))
        // Map selection sessions
        .route(selection::POST_SESSION, post(handlers::create_session))
        .route(
            selection::SESSION_SELECTION,
            get(handlers::get_selection)
                .post(handlers::apply_selection)
                .delete(handlers::reset_selection),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
